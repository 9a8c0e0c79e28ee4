//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// eqvis - render and check the eqmarl-vis README
#[derive(Parser, Debug)]
#[command(name = "eqvis", version)]
#[command(about = "Render and check the eqmarl-vis README from its manifest", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "EQVIS_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the README from the manifest
    #[command(alias = "r")]
    Render {
        /// Manifest path (defaults to the configured manifest)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fail if the README differs from a fresh rendering
    #[command(alias = "c")]
    Check {
        /// Manifest path (defaults to the configured manifest)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// README path (defaults to the configured README)
        #[arg(short, long)]
        readme: Option<PathBuf>,
    },

    /// List the title, media, authors, and links found in a README
    #[command(alias = "i")]
    Inspect {
        /// README path (defaults to the configured README)
        #[arg(short, long)]
        readme: Option<PathBuf>,
    },

    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `render.media_heading`)
    Get { key: String },
    /// Set a value by dotted key in the config file
    Set { key: String, value: String },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
