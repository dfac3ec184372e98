//! Wavefront Mesher CLI
//!
//! Inspect and convert Wavefront OBJ files.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wavefront_mesher::{export_json, export_obj, ParserConfig, Wavefront, WavefrontFile};

#[derive(Parser)]
#[command(name = "wavefront-mesher")]
#[command(author, version, about = "Parse and triangulate Wavefront OBJ files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show buffer sizes, triangle counts and bounds of an OBJ file
    Info {
        /// Input OBJ file
        #[arg(short, long)]
        input: PathBuf,

        /// Text encoding label (e.g., "utf-8", "latin1", "utf-16le")
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
    },

    /// Triangulate an OBJ file and write it out again
    Convert {
        /// Input OBJ file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: OutputFormat,

        /// Text encoding label (e.g., "utf-8", "latin1", "utf-16le")
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Triangulated Wavefront OBJ
    Obj,
    /// Document as JSON
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input, encoding } => {
            show_info(&input, &encoding)?;
        }
        Commands::Convert {
            input,
            output,
            format,
            encoding,
        } => {
            convert(&input, &output, format, &encoding)?;
        }
    }

    Ok(())
}

/// Warnings by default; `RUST_LOG` directives replace that level.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn load(input: &Path, encoding: &str) -> Result<Wavefront, Box<dyn std::error::Error>> {
    println!("Loading {:?}...", input);
    let config = ParserConfig::default().with_encoding_label(encoding)?;
    Ok(WavefrontFile::with_config(input, config).parse()?)
}

fn show_info(input: &Path, encoding: &str) -> Result<(), Box<dyn std::error::Error>> {
    let document = load(input, encoding)?;

    println!("\nWavefront Info:");
    println!("  Positions: {}", document.vertex_count());
    println!("  Normals: {}", document.normal_count());
    println!("  Texcoords: {}", document.texcoord_count());
    println!("  Shapes: {}", document.shapes().len());
    println!("  Triangles: {}", document.total_triangles());
    if let Some(bounds) = document.bounds() {
        println!("  Bounds: {:?} to {:?}", bounds.min, bounds.max);
        println!("  Size: {:?}", bounds.dimensions());
        println!("  Center: {:?}", bounds.center());
    }

    Ok(())
}

fn convert(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    encoding: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load(input, encoding)?;

    match format {
        OutputFormat::Obj => {
            let name = input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "mesh".to_string());
            let obj = export_obj(&document, &name)?;
            fs::write(output, &obj)?;
            println!(
                "Exported OBJ ({} triangles) to {:?}",
                document.total_triangles(),
                output
            );
        }
        OutputFormat::Json => {
            let json = export_json(&document)?;
            fs::write(output, &json)?;
            println!("Exported JSON ({} bytes) to {:?}", json.len(), output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warnings() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_can_lower_level() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            log_filter("wavefront_mesher=trace").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
