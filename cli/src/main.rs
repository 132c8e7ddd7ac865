//! layoutpdf CLI - page layout to PDF conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use layoutpdf::{layout_path_for, pdf_path_for, JsonFormat, LayoutPdf};

#[derive(Parser)]
#[command(name = "layoutpdf")]
#[command(version)]
#[command(about = "Convert a page layout description (<NAME>.txt) to PDF (<NAME>.pdf)", long_about = None)]
struct Cli {
    /// Layout name; reads <NAME>.txt
    #[arg(value_name = "NAME")]
    name: Option<PathBuf>,

    /// Output file (defaults to <NAME>.pdf)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Flate-compress page content streams
    #[arg(long)]
    compress: bool,

    /// Print the parsed layout as JSON instead of writing a PDF
    #[arg(long)]
    json: bool,

    /// Output compact JSON
    #[arg(long, requires = "json")]
    compact: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let Some(name) = cli.name.as_deref() else {
        eprintln!("{}", "Usage: layoutpdf <NAME>".yellow());
        eprintln!("       layoutpdf --help for more information");
        std::process::exit(1);
    };

    let result = if cli.json {
        cmd_json(name, cli.compact)
    } else {
        cmd_convert(name, cli.output.as_deref(), cli.compress)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    name: &Path,
    output: Option<&Path>,
    compress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = layout_path_for(name);
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| pdf_path_for(name));

    log::debug!("Converting {} -> {}", input.display(), output.display());

    let bytes = LayoutPdf::new()
        .with_compression(compress)
        .parse(&input)?
        .to_pdf()?;

    fs::write(&output, &bytes)
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    println!("{} '{}'", "Saved to".green(), output.display());
    Ok(())
}

fn cmd_json(name: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = layout_path_for(name);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = LayoutPdf::new().parse(&input)?.to_json(format)?;
    println!("{}", json);

    Ok(())
}
