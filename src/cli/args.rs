//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::invert::Strategy;

/// Binary tree inversion: mirror a tree recursively, by queue or by stack
#[derive(Parser, Debug)]
#[command(name = "treeflip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sample tree through a recursive and an iterative inversion
    Demo(OutputArgs),

    /// Invert a tree given as level-order slots and print it before and after
    Invert {
        /// Inversion strategy (default from config)
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Print a tree given as level-order slots
    Print {
        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Show or scaffold configuration
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
    /// Print effective settings as TOML
    Show,
    /// Print a commented config template
    Template,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Render the tree shape below each listing
    #[arg(long)]
    pub shape: bool,

    /// Text written after every value; must not be empty
    #[arg(long)]
    pub separator: Option<String>,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Level-order slots, e.g. `4 2 7 1 3 6 9`; `null` or `_` for an absent child
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub slots: Vec<String>,
}
