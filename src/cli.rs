use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// CSV catalog with `name,description` columns.
    /// The built-in movie list is used when omitted.
    #[clap(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// YAML config file
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of recommendations per query
    #[clap(short = 'n', long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub top_n: Option<u64>,

    /// Debug logging
    #[clap(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the interactive shell (default)
    Shell {
        /// Print similarity scores
        #[clap(long, default_value = "false")]
        scores: bool,
    },
    /// Recommend items similar to NAME
    Recommend {
        /// Item name, matched case-insensitively
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Print results as json
        #[clap(long, default_value = "false")]
        json: bool,

        /// Print similarity scores
        #[clap(long, default_value = "false")]
        scores: bool,
    },
    /// List catalog items
    List {
        /// Print results as json
        #[clap(long, default_value = "false")]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Shell { scores: false }
    }
}
