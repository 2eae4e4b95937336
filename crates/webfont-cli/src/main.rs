//! webfont — icon webfont generator
//!
//! Reads a directory of SVG icons, rewrites the fontello configuration,
//! has the font service compile it and unpacks the result. Any failure
//! anywhere in the pipeline terminates the run; this is the only
//! recovery boundary and all it does is report.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use webfont_client::{download, extract_webfont, open_session, update_config};
use webfont_svg::build_icons;

/// Generate an icon webfont from a directory of SVG files
#[derive(Parser, Debug)]
#[command(name = "webfont", version, about)]
struct Args {
    /// Path to the svg icons folder
    #[arg(long, default_value = "icons")]
    icons: PathBuf,

    /// Path to the output folder
    #[arg(long, default_value = "webfont")]
    out: PathBuf,

    /// Path to the fontello configuration file
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    let icons = build_icons(&args.icons)
        .with_context(|| format!("failed to build icons from {}", args.icons.display()))?;
    info!("parsed {} icons from {}", icons.len(), args.icons.display());

    update_config(&args.config, &icons)
        .with_context(|| format!("failed to update {}", args.config.display()))?;

    let session = open_session(&args.config).context("failed to open a font build session")?;
    let archive = download(&session).context("failed to download the generated webfont")?;
    extract_webfont(&archive, &args.out)
        .with_context(|| format!("failed to extract the webfont into {}", args.out.display()))?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            println!("✅ {}", "Done".green());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("❌ {}", format!("{error:#}").red());
            ExitCode::FAILURE
        }
    }
}
