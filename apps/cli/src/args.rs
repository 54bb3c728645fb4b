//! # CLI Argument Definitions
//!
//! Command-line interface of `factorio-progress`, declared with `clap`'s derive API.

use clap::{ArgAction, Args, Parser, Subcommand};
use fprog::domain::charset::Charset;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "factorio-progress")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Factorio display-panel progress bars as blueprint strings")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write rolling log files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to run (`generate` when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the blueprint string and copy it to the clipboard
    Generate(GenerateArgs),
    /// Render a few bar states in the terminal
    Preview(PreviewArgs),
    /// Decode a blueprint string into pretty-printed JSON
    Decode(DecodeArgs),
}

/// Overrides applied on top of the configured bar defaults.
#[derive(Debug, Default, Clone, Args)]
pub struct BarArgs {
    /// Number of full blocks in each bar
    #[arg(long, value_name = "N")]
    pub length: Option<u32>,

    /// Sub-steps between two consecutive messages
    #[arg(long, value_name = "N")]
    pub step_size: Option<u32>,

    /// Character set: blocks or border
    #[arg(long, value_name = "SET")]
    pub charset: Option<Charset>,

    /// Constant bar colour (#rrggbb)
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,
}

#[derive(Debug, Default, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub bar: BarArgs,

    /// Signal of a custom bar; repeat for several bars (replaces configured bars)
    #[arg(short, long = "signal", value_name = "SIGNAL")]
    pub signals: Vec<String>,

    /// Print the blueprint string to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Do not copy the blueprint string to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub bar: BarArgs,

    /// Number of evenly spaced states to show
    #[arg(short = 'n', long, default_value_t = 5)]
    pub samples: usize,

    /// Rich text placed before the bar
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Blueprint string; `-` reads stdin, omitted reads the clipboard
    pub blueprint: Option<String>,
}
