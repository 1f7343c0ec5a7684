mod cli;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use markdown_loom_config::Config;
use markdown_loom_engine::{
    Document, diff_documents, editing::EditorSettings, parsing::snapshot::outline, scan,
};
use serde::Serialize;
use std::path::Path;

use cli::{CliArgs, Command};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();

    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_or_default()?;
    let pretty = config.pretty_json && !args.compact;

    match args.command {
        Command::Scan { file, outline: true } => {
            print!("{}", outline(&scan(&read(&file)?)));
        }
        Command::Scan { file, .. } => {
            print_json(&scan(&read(&file)?), pretty)?;
        }
        Command::Diff { old, new } => {
            let ops = diff_documents(&scan(&read(&old)?), &scan(&read(&new)?))?;
            log::info!("{} top-level ops", ops.len());
            print_json(&ops, pretty)?;
        }
        Command::Replay {
            file,
            script,
            patches,
        } => {
            let script = config.resolve_script(&script);
            let cmds = script::parse_script(&read(&script)?)?;
            log::info!("replaying {} commands from {}", cmds.len(), script.display());

            let mut doc = Document::from_text(&read(&file)?).with_settings(EditorSettings {
                tab_text: config.tab_text.clone(),
            });
            let mut applied = Vec::with_capacity(cmds.len());
            for cmd in cmds {
                applied.push(doc.apply(cmd)?);
            }

            if patches {
                print_json(&applied, pretty)?;
            } else {
                print!("{}", doc.text());
            }
        }
        Command::Config { init } => {
            if init {
                init_config(&config, &config_path)?;
            }
            println!("{}", config_path.display());
            print_json(&config, pretty)?;
        }
    }

    Ok(())
}

/// Writes `config` to `path` unless a file is already there.
fn init_config(config: &Config, path: &Path) -> Result<()> {
    if path.exists() {
        log::info!("Config already exists at {}, leaving it alone", path.display());
        return Ok(());
    }
    config.save_to_path(path)?;
    log::info!("Wrote config to {}", path.display());
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
