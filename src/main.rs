//! equicube CLI - cube-cross cubemap to equirectangular panorama.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use equicube::codec::{load_source_image, save_png, PngOptions};
use equicube::pipeline::{cross_to_equirect, TransformOptions};

/// Remap a horizontal-cross cubemap image onto an equirectangular panorama.
#[derive(Parser)]
#[command(name = "equicube")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Input cubemap image (4x3 horizontal cross).
    #[arg(short, long)]
    input: PathBuf,

    /// Output panorama image.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Output panorama width in pixels.
    #[arg(short, long, default_value = "2048", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Output panorama height in pixels.
    #[arg(short = 'h', long, default_value = "1024", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Run the remap on a single thread.
    #[arg(long)]
    sequential: bool,

    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    println!("equicube - cubemap to equirectangular");
    println!("=====================================");
    println!("Input:  {}", cli.input.display());
    println!("Output: {}", cli.output.display());
    println!("Size:   {}x{}", cli.width, cli.height);

    let start = Instant::now();

    let source = load_source_image(&cli.input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", cli.input.display(), e);
        std::process::exit(1);
    });
    println!(
        "Loaded cubemap: {}x{} ({} channels)",
        source.width(),
        source.height(),
        source.channels()
    );

    let options = TransformOptions {
        width: cli.width,
        height: cli.height,
        parallel: !cli.sequential,
    };
    let panorama = cross_to_equirect(&source, &options).unwrap_or_else(|e| {
        eprintln!("Error during remap: {}", e);
        std::process::exit(1);
    });
    println!("Remap completed in {:.2?}", start.elapsed());

    save_png(&panorama, &cli.output, &PngOptions::default()).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {}", cli.output.display(), e);
        std::process::exit(1);
    });

    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}
