use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::app::domain::{Operation, ThemeChoice};

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "text-cleaner",
    version,
    about = "Clean up text: whitespace, case, lines, HTML tags and accents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
    /// Settings file to use instead of the per-user one.
    #[arg(global = true, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply one or more operations, in order, to the input text.
    Run(RunArgs),
    /// Print word and character counts for the input text.
    Stats(StatsArgs),
    /// List the available operations.
    Ops,
    /// Show or change the saved theme.
    Theme(ThemeArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Operations to apply, e.g. `clean sort dedupe`.
    #[arg(value_name = "OPERATION", required = true)]
    pub operations: Vec<Operation>,
    /// Read input from this file instead of stdin (`-` means stdin).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Write the output to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Save the trimmed output as text-cleaner-output.txt in this directory.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
    /// Strip accents as the last step of `clean`.
    #[arg(long, conflicts_with = "keep_accents")]
    pub remove_accents: bool,
    /// Keep accents in `clean` even if the settings say otherwise.
    #[arg(long)]
    pub keep_accents: bool,
    /// Feed each operation the previous output, even if the settings say otherwise.
    #[arg(long, conflicts_with = "no_apply_to_output")]
    pub apply_to_output: bool,
    /// Run every operation on the original input instead of chaining.
    #[arg(long)]
    pub no_apply_to_output: bool,
    /// Print input and output statistics to stderr.
    #[arg(long)]
    pub stats: bool,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Read input from this file instead of stdin (`-` means stdin).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Emit the counts as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Defaults to `show`.
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ThemeAction {
    /// Print the saved theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Save a theme: `light`, `dark`, `theme-light` or `theme-dark`.
    Set {
        #[arg(value_name = "THEME")]
        theme: ThemeChoice,
    },
}

impl RunArgs {
    /// Accent setting for this run; `None` keeps the saved value.
    pub fn remove_accents_override(&self) -> Option<bool> {
        if self.remove_accents {
            Some(true)
        } else if self.keep_accents {
            Some(false)
        } else {
            None
        }
    }

    /// Chaining setting for this run; `None` keeps the saved value.
    pub fn apply_to_output_override(&self) -> Option<bool> {
        if self.apply_to_output {
            Some(true)
        } else if self.no_apply_to_output {
            Some(false)
        } else {
            None
        }
    }
}
