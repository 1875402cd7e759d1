//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Wrap matching `<img>` tags in a blurred-background container
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HTML files to rewrite in place (default: `files` from the config)
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Height class for the wrapper container (e.g., h-64)
    #[arg(short = 'H', long)]
    pub height_class: Option<String>,

    /// Exact `class` attribute value of images to wrap
    #[arg(short = 'p', long = "img-class")]
    pub img_class: Option<String>,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Config file path (default: blurfill.toml, optional)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
