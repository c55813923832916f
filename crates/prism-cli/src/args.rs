//! Command-line argument definitions for the prism CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each pipeline stage is a subcommand; path arguments
//! override the corresponding configuration entries.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the prism pipeline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The pipeline stage to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// The pipeline stages exposed as subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split the source image into per-color fragment documents
    Split {
        /// Path to the source SVG (overrides configuration)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for fragment output (overrides configuration)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Convert fragment documents into JSX component snippets
    Convert {
        /// Directory of fragment documents (overrides configuration)
        #[arg(short, long)]
        in_dir: Option<PathBuf>,

        /// Directory for snippet output (overrides configuration)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Combine component snippets into the aggregate module
    Combine {
        /// Directory of component snippets (overrides configuration)
        #[arg(short, long)]
        in_dir: Option<PathBuf>,

        /// Path of the aggregate module (overrides configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run split, convert, and combine in sequence
    Run,
}
