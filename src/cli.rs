use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "davshelf")]
#[command(author, version, about = "Browse a WebDAV media share and open files in an external player")]
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
    /// Start the web server
    Start {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch the listing once and print the enriched items
    List {
        /// Player to format play links for
        #[arg(long)]
        player: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the search title guessed from each file name
    GuessTitle {
        /// File names to normalize
        #[arg(required = true)]
        filenames: Vec<String>,
    },

    /// Validate configuration and print a summary
    Validate,

    /// Display version information
    Version,
}
