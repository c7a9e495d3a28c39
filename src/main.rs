//! icongen - generate UI components from SVG icons.

mod cli;
mod component;
mod config;
mod embed;
mod error;
mod logger;
mod svg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IconConfig;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Generate { args } => {
            let config = IconConfig::load(&cli.config, args)?;
            cli::generate::generate_icons(&config).map(|_| ())
        }
        Commands::Init { dir } => {
            let root = dir.clone().unwrap_or_else(|| PathBuf::from("."));
            cli::init::init_project(&root)
        }
    }
}
