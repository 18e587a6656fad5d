use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(author, version, about = "Movies released in a year, with their editors")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server exposing GET /movies
    Start {
        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch one page of movies for a year and print them
    Movies {
        /// Primary release year
        #[arg(required = true)]
        year: String,

        /// Discovery page (1-based)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default locations if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
