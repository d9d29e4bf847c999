//! Command-line configuration.

use std::path::PathBuf;

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::application::FrameDelay;
use crate::domain::{Topology, presets};
use crate::input::Command;

pub const DEFAULT_DELAY_MS: u64 = 500;

/// Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(name = "term_life", version)]
pub struct Config {
    /// Seed for the random fills; drawn from the OS when omitted
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Initial delay between generations
    #[arg(
        long = "delay-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_DELAY_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub delay_ms: u64,

    /// Start with bounded edges instead of wrapping
    #[arg(long)]
    pub plane: bool,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parse arguments, with the key and pattern reference appended to `--help`
    pub fn try_parse_with_help<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .after_help(controls_help())
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    pub fn topology(&self) -> Topology {
        Topology::from_wrap(!self.plane)
    }

    pub fn frame_delay(&self) -> FrameDelay {
        FrameDelay::from_millis(self.delay_ms)
    }
}

/// Key map and pattern list shown after the flags in `--help`
pub fn controls_help() -> String {
    let mut help = String::from("Keys:\n");
    for command in Command::all() {
        let line = format!("  {}  {}\n", command.key(), command.describe());
        help.push_str(&line);
    }
    help.push_str("\nPatterns:\n");
    for pattern in presets::all_patterns() {
        let (rows, cols) = pattern.bounds();
        help.push_str(&format!(
            "  {} ({rows}x{cols}): {}\n",
            pattern.name, pattern.description
        ));
    }
    help
}
