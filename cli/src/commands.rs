pub mod list;
pub mod show;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use solid_common::config::Contrast;
use solid_core::lesson::Principle;

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "The SOLID principles, each shown before and after.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide banner and headers; repeat to also hide the summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the principles and the domain each is told in
    #[command(alias = "l")]
    List,
    /// Play the lesson for one principle (e.g. `srp`, `o`, `liskov-substitution`)
    #[command(alias = "s")]
    Show {
        principle: Principle,
        /// Which half of the lesson to play
        #[arg(long, value_enum, default_value_t = Only::Both)]
        only: Only,
    },
    /// Play every lesson in S-O-L-I-D order
    #[command(alias = "t")]
    Tour {
        /// Which half of each lesson to play
        #[arg(long, value_enum, default_value_t = Only::Both)]
        only: Only,
    },
}

impl Commands {
    /// Halves selected by `--only`; `list` plays nothing, so it gets the default.
    pub fn contrast(&self) -> Contrast {
        match self {
            Commands::Show { only, .. } | Commands::Tour { only } => (*only).into(),
            Commands::List => Contrast::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Only {
    Before,
    After,
    Both,
}

impl From<Only> for Contrast {
    fn from(only: Only) -> Self {
        match only {
            Only::Before => Contrast::Before,
            Only::After => Contrast::After,
            Only::Both => Contrast::Both,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
