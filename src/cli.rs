use clap::{Parser, Subcommand};

/// An in-memory string analysis and filtered-query service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve line-delimited JSON requests over stdin/stdout
    Serve,
    /// Analyze a string and print its computed properties
    Analyze {
        /// The string to analyze
        value: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Translate a natural-language phrase into structured filters
    Translate {
        /// The phrase to translate (e.g. "palindromic strings longer than 5")
        query: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
