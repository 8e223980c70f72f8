//! glyphscan command-line reader
//!
//! Usage: `glyphscan <FONT> <IMAGE>`
//!
//! Exit status: 0 on success, 1 on a usage error, 2 when the image cannot
//! be read.

use clap::Parser;
use glyphscan::recog::Font;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "glyphscan")]
#[command(about = "Read the text lines of a scanned page")]
#[command(version)]
struct Cli {
    /// Font identifier used to classify graphemes
    font: String,

    /// Page image (BMP, PNM, PNG, or JPEG)
    image: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let font = Font::new(cli.font);
    match glyphscan::read_page(&cli.image, &font) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("glyphscan: {}: {}", cli.image.display(), e);
            ExitCode::from(2)
        }
    }
}
