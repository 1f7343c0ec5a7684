//! Command-line argument parsing for `loom`

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Markdown lexer, structural diff and edit replay
#[derive(Parser, Debug)]
#[command(name = "loom", version, about = "Markdown lexer, structural diff and edit replay")]
pub struct CliArgs {
    /// Print single-line JSON regardless of the config file
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token tree of a file as JSON
    Scan {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print an indented outline instead of JSON
        #[arg(long)]
        outline: bool,
    },
    /// Print the edit script between the token trees of two files
    Diff {
        #[arg(value_name = "OLD")]
        old: PathBuf,
        #[arg(value_name = "NEW")]
        new: PathBuf,
    },
    /// Run an edit script against a file and print the resulting text
    Replay {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Script with one command per line (relative paths also resolve
        /// against `scripts_dir` from the config)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Print every patch as JSON instead of the final text
        #[arg(long)]
        patches: bool,
    },
    /// Show the config file path and the settings in effect
    Config {
        /// Write a config file with the current settings if none exists
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scan() {
        let args = CliArgs::parse_from(["loom", "scan", "notes.md"]);
        assert!(!args.compact);
        assert!(matches!(
            args.command,
            Command::Scan { ref file, outline: false } if file == &PathBuf::from("notes.md")
        ));
    }

    #[test]
    fn parses_replay_with_flags() {
        let args = CliArgs::parse_from(["loom", "replay", "a.md", "edit.loom", "--patches", "--compact"]);
        assert!(args.compact);
        assert!(matches!(args.command, Command::Replay { patches: true, .. }));
    }

    #[test]
    fn parses_config_init() {
        let args = CliArgs::parse_from(["loom", "config", "--init"]);
        assert!(matches!(args.command, Command::Config { init: true }));

        let args = CliArgs::parse_from(["loom", "config"]);
        assert!(matches!(args.command, Command::Config { init: false }));
    }

    #[test]
    fn diff_needs_two_files() {
        assert!(CliArgs::try_parse_from(["loom", "diff", "a.md"]).is_err());
    }
}
