//! CLI argument definitions.
//!
//! Cairn is invoked with zero arguments in normal use; every flag here is
//! an additive override and the bare invocation runs the full bootstrap.

use clap::Parser;
use std::path::PathBuf;

/// Cairn - dependency bootstrapper.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the requirement manifest (overrides requirements.txt)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Show verbose output, including package-manager output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
