//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Convert between arabic and roman numerals.
///
/// Values are read from the arguments if present, otherwise from standard input.
#[derive(Parser, Debug)]
#[command(name = "roconv")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Conversion mode: 'I' roman to arabic, '1' arabic to roman [default: 1]
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Values to convert (read from stdin when omitted)
    pub values: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Print a config template
    Template,
}
