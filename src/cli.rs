use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "babynames")]
#[command(about = "Generate baby name ideas with meanings and pictures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep favorites in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate names once and print them.
    Generate {
        #[arg(long)]
        culture: String,

        #[arg(long)]
        letter: String,

        #[arg(long)]
        json: bool,
    },

    /// Print saved favorites.
    Favorites {
        #[arg(long)]
        json: bool,
    },
}
