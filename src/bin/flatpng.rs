//! flatpng CLI - test image generator
//!
//! Builds palette-indexed test PNGs without invoking any compression codec.
//! Handy for exercising decoders and terminals with known-good output.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use flatpng::Image;

/// Generate palette-indexed test PNGs with stored (uncompressed) DEFLATE.
#[derive(Parser, Debug)]
#[command(name = "flatpng")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image width in pixels
    #[arg(value_name = "WIDTH")]
    width: u32,

    /// Image height in pixels
    #[arg(value_name = "HEIGHT")]
    height: u32,

    /// Output file path
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Palette depth (1-256)
    #[arg(short, long, default_value = "8", value_parser = clap::value_parser!(u16).range(1..=256))]
    depth: u16,

    /// Test pattern
    #[arg(short, long, value_enum, default_value = "bars")]
    pattern: Pattern,

    /// Print the PNG as Base64 on stdout instead of writing a file
    #[arg(long)]
    base64: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pattern {
    /// Vertical color bars
    Bars,
    /// Two-color checkerboard
    Checker,
    /// Horizontal grayscale ramp
    Ramp,
}

/// Classic color-bar palette, truncated to the requested depth.
const BAR_COLORS: [(u8, u8, u8); 8] = [
    (255, 255, 255),
    (255, 255, 0),
    (0, 255, 255),
    (0, 255, 0),
    (255, 0, 255),
    (255, 0, 0),
    (0, 0, 255),
    (0, 0, 0),
];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let start = Instant::now();
    let mut image = Image::new(args.width, args.height, args.depth)?;

    match args.pattern {
        Pattern::Bars => fill_bars(&mut image)?,
        Pattern::Checker => fill_checker(&mut image)?,
        Pattern::Ramp => fill_ramp(&mut image)?,
    }

    if args.verbose {
        eprintln!("Image: {}x{}", image.width(), image.height());
        eprintln!("  Pattern: {:?}", args.pattern);
        eprintln!("  Palette: {} of {} entries", image.palette_len(), image.depth());
        eprintln!("  Build time: {:.2?}", start.elapsed());
    }

    if args.base64 {
        println!("{}", image.to_base64());
        return Ok(());
    }

    let png = image.dump();
    fs::write(&args.output, &png)?;
    println!("{:?}: {}", args.output, format_size(png.len() as u64));
    Ok(())
}

fn fill_bars(image: &mut Image) -> flatpng::Result<()> {
    let bars = (image.depth() as usize).min(BAR_COLORS.len());
    let indices: Vec<u8> = BAR_COLORS[..bars]
        .iter()
        .map(|&(r, g, b)| image.allocate_color(r, g, b))
        .collect();

    let width = image.width();
    for y in 0..image.height() {
        for x in 0..width {
            let bar = (x as usize * bars / width as usize).min(bars - 1);
            image.set_pixel(x, y, indices[bar])?;
        }
    }
    Ok(())
}

fn fill_checker(image: &mut Image) -> flatpng::Result<()> {
    let dark = image.allocate_color(0, 0, 0);
    let light = image.allocate_color(255, 255, 255);

    for y in 0..image.height() {
        for x in 0..image.width() {
            let index = if (x / 8 + y / 8) % 2 == 0 { dark } else { light };
            image.set_pixel(x, y, index)?;
        }
    }
    Ok(())
}

fn fill_ramp(image: &mut Image) -> flatpng::Result<()> {
    let levels = image.depth() as u32;
    let span = (levels - 1).max(1);
    let indices: Vec<u8> = (0..levels)
        .map(|i| {
            let v = (i * 255 / span) as u8;
            image.allocate_color(v, v, v)
        })
        .collect();

    let width = image.width();
    for y in 0..image.height() {
        for x in 0..width {
            let level = (x * levels / width).min(levels - 1) as usize;
            image.set_pixel(x, y, indices[level])?;
        }
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
