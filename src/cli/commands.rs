use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Mode, Topic};

#[derive(Parser)]
#[command(name = "innews")]
#[command(about = "A summarised news portal in your terminal")]
#[command(version)]
pub struct Cli {
    /// Placeholder image shown when an article image cannot be loaded
    #[arg(long, global = true)]
    pub placeholder: Option<PathBuf>,

    /// Timeout in seconds for every network request
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print the digest as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct CountArg {
    /// Number of news to show (5-25, or 5-15 for search)
    #[arg(short = 'n', long, default_value_t = 5, env = "INNEWS_COUNT")]
    pub count: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show trending news
    Trending {
        #[command(flatten)]
        count: CountArg,
    },

    /// Show news for one of your favourite topics
    Topic {
        /// One of the topics listed by `innews topics`
        topic: Topic,

        #[command(flatten)]
        count: CountArg,
    },

    /// Search news by keyword
    Search {
        /// Keyword(s) to search for
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,

        #[command(flatten)]
        count: CountArg,
    },

    /// List available topics
    Topics,
}

impl Commands {
    /// Mode and requested count, or `None` for commands that don't fetch news.
    pub fn digest_mode(&self) -> Option<(Mode, usize)> {
        match self {
            Commands::Trending { count } => Some((Mode::Trending, count.count)),
            Commands::Topic { topic, count } => Some((Mode::Category(*topic), count.count)),
            Commands::Search { keyword, count } => {
                Some((Mode::Search(keyword.join(" ")), count.count))
            }
            Commands::Topics => None,
        }
    }
}
