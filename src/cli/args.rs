//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::RenderStyle;

/// Home theater facade and composite file tree, narrated
#[derive(Parser, Debug)]
#[command(name = "hometree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "HOMETREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not wait for Enter after the demo
    #[arg(long, global = true)]
    pub no_pause: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demonstration scenario (default)
    Demo {
        /// Which part to run
        #[arg(short, long, value_enum, default_value_t = DemoPart::All)]
        part: DemoPart,
        /// Tree render style (default: from config)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Run a single home theater scene on fresh devices
    Theater {
        #[command(subcommand)]
        command: TheaterCommands,
    },

    /// Print the sample file tree
    Tree {
        /// Tree render style (default: from config)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoPart {
    All,
    Facade,
    Composite,
}

#[derive(Subcommand, Debug)]
pub enum TheaterCommands {
    /// Watch a movie
    Watch {
        /// TV channel (default: from config)
        #[arg(long)]
        channel: Option<String>,
        /// Volume 0-100, clamped (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        volume: Option<i32>,
    },

    /// Play a game on the console
    Game {
        /// Game title
        name: String,
        /// Volume 0-100, clamped (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        volume: Option<i32>,
    },

    /// Listen to music
    Music {
        /// Volume 0-100, clamped (default: from config)
        #[arg(long, allow_hyphen_values = true)]
        volume: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Target file (default: global config path)
        #[arg(value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
    },

    /// Show config paths
    Path,
}
