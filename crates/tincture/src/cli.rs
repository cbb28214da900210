//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Tincture command line arguments.
#[derive(Parser, Debug)]
#[command(name = "tincture")]
#[command(about = "Convert design-token themes between definitions and CSS custom properties")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./tincture.toml when present)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render theme presets as CSS custom properties
    Build(BuildArgs),
    /// Parse a CSS stylesheet into a preset source file
    Ingest(IngestArgs),
    /// Write the entry stylesheet and the import-inlined bundle
    Bundle(BundleArgs),
    /// Render the normalized theme layer from ingest stylesheets
    Themes(ThemesArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory of preset sources, loaded after the built-in presets
    #[arg(long, value_name = "DIR")]
    pub presets: Option<PathBuf>,

    /// Only render these theme ids, in this order
    #[arg(long = "theme", value_name = "ID")]
    pub themes: Vec<String>,

    /// Emit both blocks for every theme and mark declarations !important
    #[arg(long)]
    pub strict: bool,

    /// Also emit font, radius, shadow and spacing tokens
    #[arg(long)]
    pub tokens: bool,

    /// Write to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct IngestArgs {
    /// Stylesheet to ingest
    #[arg(value_name = "INPUT.css")]
    pub input: Option<PathBuf>,

    /// Directory the preset source is written to
    #[arg(long, value_name = "DIR")]
    pub presets_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct BundleArgs {
    /// Styles root
    #[arg(long, value_name = "DIR")]
    pub styles: Option<PathBuf>,

    /// Do not run the configured token generator first
    #[arg(long)]
    pub skip_generator: bool,
}

#[derive(Args, Debug, Default)]
pub struct ThemesArgs {
    /// Directory of ingest stylesheets
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output file (defaults to <styles>/.generated/themes.css)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
