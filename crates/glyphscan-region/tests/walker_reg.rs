//! Component walker regression test
//!
//! Extent accumulation and reachability over synthetic glyph shapes.
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-region --test walker_reg
//! ```

use glyphscan_core::{Point, Region};
use glyphscan_region::{ComponentWalker, trim_bounds};
use glyphscan_test::{RegParams, fixtures};

#[test]
fn walker_reg() {
    let mut rp = RegParams::new("walker");

    // --- Extent of a disk matches its trimmed bounds ---
    let disk = fixtures::disk(40, 40, 20, 20, 9).expect("disk fixture");
    let page = Region::of_image(40, 40);
    let walker = ComponentWalker::new(&disk, page).expect("walker");
    let extent = walker.find_extent(Point::new(20, 20)).expect("extent");
    eprintln!("disk extent: {:?}", extent);
    rp.compare_regions(trim_bounds(&disk, page), extent.to_region());
    rp.compare_values(19.0, extent.width() as f64, 0.0);
    rp.compare_values(19.0, extent.height() as f64, 0.0);

    // --- Extent of a ring from a stroke pixel ---
    let ring = fixtures::ring(40, 40, 20, 20, 12, 6).expect("ring fixture");
    let walker = ComponentWalker::new(&ring, page).expect("walker");
    let extent = walker.find_extent(Point::new(20, 9)).expect("extent");
    rp.compare_regions(Region::new(8, 8, 32, 32), extent.to_region());

    // The paper inside the ring is its own component
    let inner = walker.find_extent(Point::new(20, 20)).expect("extent");
    eprintln!("ring hole extent: {:?}", inner);
    rp.compare_regions(Region::new(14, 14, 26, 26), inner.to_region());

    // --- Reachability ---
    let outside = Point::new(0, 0);
    let hole = Point::new(20, 20);
    rp.compare_values(
        0.0,
        walker.is_reachable(outside, hole).expect("reach") as u8 as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        walker.is_reachable(outside, Point::new(39, 39)).expect("reach") as u8 as f64,
        0.0,
    );

    // Symmetric on a connected uniformly colored component
    let pairs = [
        (Point::new(20, 9), Point::new(20, 31)),
        (Point::new(9, 20), Point::new(31, 20)),
        (Point::new(12, 12), Point::new(28, 28)),
    ];
    for (a, b) in pairs {
        let ab = walker.is_reachable(a, b).expect("reach");
        let ba = walker.is_reachable(b, a).expect("reach");
        eprintln!("{} <-> {}: {} / {}", a, b, ab, ba);
        rp.compare_values(1.0, ab as u8 as f64, 0.0);
        rp.compare_values(ab as u8 as f64, ba as u8 as f64, 0.0);
    }

    // --- Separate glyphs do not reach each other ---
    let bands = fixtures::text_bands(30, 10, &[(2, 6)], 4, 3).expect("bands fixture");
    let walker = ComponentWalker::new(&bands, Region::of_image(30, 10)).expect("walker");
    let first = Point::new(3, 4);
    let second = Point::new(10, 4);
    rp.compare_values(
        0.0,
        walker.is_reachable(first, second).expect("reach") as u8 as f64,
        0.0,
    );
    let extent = walker.find_extent(first).expect("extent");
    rp.compare_regions(Region::new(3, 2, 6, 6), extent.to_region());

    // --- Walk confined to a sub-region ---
    let walker = ComponentWalker::new(&bands, Region::new(4, 3, 5, 5)).expect("walker");
    let extent = walker.find_extent(Point::new(4, 3)).expect("extent");
    rp.compare_regions(Region::new(4, 3, 5, 5), extent.to_region());

    assert!(rp.cleanup(), "walker regression test failed");
}
