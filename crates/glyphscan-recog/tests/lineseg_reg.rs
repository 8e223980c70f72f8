//! Line segmentation regression test
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-recog --test lineseg_reg
//! ```

use glyphscan_core::Region;
use glyphscan_recog::{Font, LineSegOptions, Page, segment_lines};
use glyphscan_test::{RegParams, fixtures};

#[test]
fn lineseg_reg() {
    let mut rp = RegParams::new("lineseg");
    let options = LineSegOptions::default();

    // --- Two bands separated by paper ---
    let pix = fixtures::text_bands(60, 40, &[(5, 12), (20, 27)], 4, 3).expect("bands fixture");
    let lines = segment_lines(&pix, &options);
    eprintln!("two bands: {:?}", lines);
    rp.compare_values(2.0, lines.len() as f64, 0.0);
    rp.compare_regions(Region::new(0, 5, 59, 12), lines[0]);
    rp.compare_regions(Region::new(0, 20, 59, 27), lines[1]);

    // Legacy behavior changes nothing when no line touches the bottom
    let legacy = LineSegOptions::new().with_close_trailing_line(false);
    rp.compare_values(2.0, segment_lines(&pix, &legacy).len() as f64, 0.0);

    // --- Graphemes per line ---
    let font = Font::new("test");
    let page = Page::new(&pix, &font);
    let expected = fixtures::glyphs_per_band(60, 4, 3);
    for line in page.lines() {
        let graphemes = line.graphemes().expect("graphemes");
        eprintln!("line {}..={}: {} graphemes", line.top(), line.bottom(), graphemes.len());
        rp.compare_values(expected as f64, graphemes.len() as f64, 0.0);
        let first = graphemes[0].region();
        rp.compare_regions(Region::new(3, line.top(), 6, line.bottom()), first);
    }

    // --- A band touching the last row ---
    let pix = fixtures::text_bands(60, 40, &[(5, 12), (33, 39)], 4, 3).expect("bands fixture");
    let lines = segment_lines(&pix, &options);
    rp.compare_values(2.0, lines.len() as f64, 0.0);
    rp.compare_regions(Region::new(0, 33, 59, 39), lines[1]);
    let lines = segment_lines(&pix, &legacy);
    rp.compare_values(1.0, lines.len() as f64, 0.0);

    // --- Adjacent bands with a one-row gap ---
    let pix = fixtures::text_bands(20, 12, &[(1, 3), (5, 7)], 2, 2).expect("bands fixture");
    let lines = segment_lines(&pix, &options);
    rp.compare_values(2.0, lines.len() as f64, 0.0);
    rp.compare_regions(Region::new(0, 1, 19, 3), lines[0]);
    rp.compare_regions(Region::new(0, 5, 19, 7), lines[1]);

    // --- Blank page ---
    let blank = fixtures::blank_page(30, 30).expect("blank fixture");
    rp.compare_values(0.0, segment_lines(&blank, &options).len() as f64, 0.0);

    assert!(rp.cleanup(), "lineseg regression test failed");
}
