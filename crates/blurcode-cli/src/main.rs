//! blurcode - Decode BlurHash placeholder codes
//!
//! A command-line tool for rendering BlurHash codes to PNG images.

use blurcode::{blurhash_decode, components};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blurcode")]
#[command(version)]
#[command(about = "Decode BlurHash placeholder codes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a BlurHash code to a PNG image
    Decode {
        /// The BlurHash code, e.g. "LEHV6nWB2yk8pyo0adR*.7kCMdnj"
        code: String,

        /// Output image width in pixels
        #[arg(short = 'W', long, default_value = "32")]
        width: usize,

        /// Output image height in pixels
        #[arg(short = 'H', long, default_value = "32")]
        height: usize,

        /// Contrast multiplier for the AC terms (1.0 = as encoded)
        #[arg(short, long, default_value = "1.0")]
        punch: f32,

        /// Output PNG file (default: blurhash.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the component grid a code declares
    Info {
        /// The BlurHash code
        code: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            code,
            width,
            height,
            punch,
            output,
        } => {
            let decoded = blurhash_decode(&code, width, height, punch)?;

            let output_path = output.unwrap_or_else(|| PathBuf::from("blurhash.png"));
            let img =
                image::RgbImage::from_raw(width as u32, height as u32, decoded.pixels)
                    .ok_or("failed to create image from decoded data")?;
            img.save(&output_path)?;

            eprintln!(
                "Decoded: {}x{} pixels -> '{}'",
                width,
                height,
                output_path.display()
            );
        }

        Commands::Info { code } => {
            let (num_x, num_y) = components(&code)?;
            println!("components: {num_x}x{num_y}");
            println!("expected length: {}", 4 + 2 * num_x * num_y);
            println!("actual length: {}", code.len());
        }
    }

    Ok(())
}
