//! hex2png - write palette images as minimal PNGs
//!
//! Each input is a text file holding one image: every non-empty line is a row
//! of whitespace separated hex colors. Lines starting with `;` are comments.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use flate2::Compression;

use hexpng::PngEncoder;

/// Encode hex color grids as the smallest lossless PNG.
#[derive(Parser, Debug)]
#[command(name = "hex2png")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text files with one row of hex colors per line
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for the PNGs (defaults to next to each input)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// zlib compression level (0-9, higher = smaller file)
    #[arg(short = 'c', long, default_value = "6", value_parser = clap::value_parser!(u32).range(0..=9))]
    level: u32,

    /// Print the chosen encoding for every image
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let encoder = PngEncoder::with_level(Compression::new(args.level));

    let mut failed = 0;
    for input in &args.inputs {
        if let Err(e) = convert(&encoder, input, args.out_dir.as_deref(), args.verbose) {
            eprintln!("{}: {e}", input.display());
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} images failed", args.inputs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert(
    encoder: &PngEncoder,
    input: &Path,
    out_dir: Option<&Path>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let image = read_rows(&text);
    let png = encoder.encode(&image)?;

    let output = match out_dir {
        Some(dir) => dir.join(input.file_name().unwrap_or(input.as_os_str())),
        None => input.to_path_buf(),
    }
    .with_extension("png");
    fs::write(&output, &png)?;

    if verbose {
        // IHDR bit depth and color type
        println!(
            "{} -> {} ({}x{}, {} bit, color type {}, {} bytes)",
            input.display(),
            output.display(),
            image[0].len(),
            image.len(),
            png[24],
            png[25],
            png.len()
        );
    }
    Ok(())
}

fn read_rows(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(|line| line.split_whitespace().collect())
        .collect()
}
