use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use controls::config::{Config, Trigger};
use controls::input::{Button, Key, KeyGroup};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "controls")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CONTROLS_GIT_HASH"), ")"),
    about = "Mouse button and keyboard key names backed by Linux input codes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the name-to-code mapping table
    List {
        /// Which controls to list
        #[arg(value_enum, default_value_t = Kind::All)]
        kind: Kind,

        /// Emit JSON instead of a text table
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },

    /// Print the input code of each key or button name (buttons take a Mouse prefix)
    Lookup {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },

    /// Print the key or button for an input code (decimal or 0x-prefixed hex)
    Code {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Validate the keybindings in a config file
    Check {
        /// Config file to check (defaults to ~/.config/controls/config.toml)
        #[arg(long, short = 'c', value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Write the documented example config to the default location
    InitConfig,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Keys,
    Buttons,
    All,
}

/// One row of `controls list`.
#[derive(Debug, Serialize)]
struct Entry {
    name: String,
    code: u32,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<KeyGroup>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { kind, json } => list(kind, json),
        Command::Lookup { names } => lookup(&names),
        Command::Code { code } => describe_code(&code),
        Command::Check { config } => check(config),
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Wrote example config to {}", path.display());
            Ok(())
        }
    }
}

fn entries(kind: Kind) -> Vec<Entry> {
    let keys = Key::ALL.into_iter().map(|key| Entry {
        name: key.to_string(),
        code: key.code(),
        kind: "key",
        group: Some(key.group()),
    });
    let buttons = Button::ALL.into_iter().map(|button| Entry {
        name: Trigger::Button(button).to_string(),
        code: button.code(),
        kind: "button",
        group: None,
    });

    match kind {
        Kind::Keys => keys.collect(),
        Kind::Buttons => buttons.collect(),
        Kind::All => keys.chain(buttons).collect(),
    }
}

fn list(kind: Kind, json: bool) -> Result<()> {
    let entries = entries(kind);
    log::debug!("Listing {} controls", entries.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let group = entry
            .group
            .map(|group| group.to_string())
            .unwrap_or_else(|| "mouse".to_string());
        println!("{:<14} {:>5}  {:#06x}  {}", entry.name, entry.code, entry.code, group);
    }
    Ok(())
}

fn lookup(names: &[String]) -> Result<()> {
    for name in names {
        let trigger: Trigger = name.parse()?;
        let code = match trigger {
            Trigger::Key(key) => key.code(),
            Trigger::Button(button) => button.code(),
        };
        println!("{:<14} {}", trigger, code);
    }
    Ok(())
}

fn parse_code(text: &str) -> Result<u32> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("Invalid input code '{}'", text))
}

fn describe_code(text: &str) -> Result<()> {
    let code = parse_code(text)?;

    let trigger = match (Key::from_code(code), Button::from_code(code)) {
        (Some(key), _) => Trigger::Key(key),
        (None, Some(button)) => Trigger::Button(button),
        (None, None) => bail!("Input code {} is not mapped to a key or mouse button", code),
    };

    println!("{}", trigger);
    Ok(())
}

fn check(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_config_path()?,
    };
    log::info!("Checking {}", path.display());

    let mut config = Config::read_unvalidated(&path)?;

    let invalid = config.bindings.invalid_bindings();
    for entry in &invalid {
        eprintln!("{}: '{}': {}", entry.action, entry.binding, entry.error);
    }

    config.bindings.sanitize();
    let duplicate = config.bindings.build_action_map().err();
    if let Some(err) = &duplicate {
        eprintln!("{}", err);
    }

    let problems = invalid.len() + usize::from(duplicate.is_some());
    if problems > 0 {
        bail!("{} problem(s) found in {}", problems, path.display());
    }

    let bindings: usize = config.bindings.actions.values().map(Vec::len).sum();
    println!(
        "{}: {} action(s), {} binding(s) OK",
        path.display(),
        config.bindings.actions.len(),
        bindings
    );
    Ok(())
}
