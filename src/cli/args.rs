//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Generate UI components from SVG icons
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: icongen.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "icongen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate one component per SVG icon
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Write a starter config and a copy of the default template
    #[command(visible_alias = "i")]
    Init {
        /// Project directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Glob pattern selecting SVG files (e.g. "icons/**/*.svg")
    #[arg(short, long)]
    pub entry: Option<String>,

    /// Output directory for generated components (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Regenerate components that already exist in the output directory
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rewrite: Option<bool>,

    /// Prefix for component names
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Postfix for component names
    #[arg(short = 'P', long)]
    pub postfix: Option<String>,

    /// Extension of generated files (default: .tsx)
    #[arg(short = 'x', long)]
    pub extension: Option<String>,

    /// Handlebars template for one component (default: built-in React template)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub template: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
