//! `kvconf`: inspect and edit `key=value` config files from the shell.
//!
//! Edits keep comments, blank lines, and line order intact.
//!
//! # Usage
//!
//! ```text
//! kvconf [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get      <FILE> <KEY> [--default <V>]  Print a value
//!   list     <FILE> <KEY>                  Print a list value, one token per line
//!   dump     <FILE>                        Print every entry with its kind
//!   set      <FILE> <KEY> <VALUE>          Set a value (creates the file if needed)
//!   remove   <FILE> <KEY>                  Remove every line for a key
//!   copy     <SRC> <DST>                   Copy a file through the buffer
//!   settings                               Print the effective settings as TOML
//!
//! Options:
//!   --settings  <PATH>  Settings file [env: KVCONF_SETTINGS]
//!   --separator <CHAR>  List separator, overrides the settings file [env: KVCONF_SEPARATOR]
//! ```
//!
//! Logs go to stderr.  `RUST_LOG` takes precedence over the settings file's
//! `logging.level`.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use kvconf_cli::application::{
    copy_file, dump, get_value, list_values, remove_key, set_value, EditOutcome,
};
use kvconf_cli::infrastructure::{load_settings, Settings};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit key=value config files without losing comments or layout.
#[derive(Debug, Parser)]
#[command(name = "kvconf", version)]
struct Cli {
    /// Settings file to use instead of the platform default.
    #[arg(long, global = true, env = "KVCONF_SETTINGS")]
    settings: Option<PathBuf>,

    /// Separator between list tokens.  Overrides `list.separator` from the
    /// settings file.
    #[arg(long, global = true, env = "KVCONF_SEPARATOR")]
    separator: Option<char>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value of KEY.
    Get {
        file: PathBuf,
        key: String,
        /// Printed when KEY is absent.  Without it, an absent key is an error.
        #[arg(long)]
        default: Option<String>,
    },
    /// Print the list value of KEY, one token per line.
    List { file: PathBuf, key: String },
    /// Print every entry of FILE with its kind.
    Dump { file: PathBuf },
    /// Set KEY to VALUE, keeping the rest of the file as it is.
    Set {
        file: PathBuf,
        key: String,
        value: String,
    },
    /// Remove every line for KEY.
    Remove { file: PathBuf, key: String },
    /// Copy SRC to DST through a read and a write buffer.
    Copy { src: PathBuf, dst: PathBuf },
    /// Print the effective settings as TOML.
    Settings,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Settings are loaded before logging so their level can be applied; a
    // settings error is reported once logging is up.
    let settings = load_settings(cli.settings.as_deref());
    let level = settings
        .as_ref()
        .map_or("info", |s| s.logging.level.as_str())
        .to_string();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let mut settings = settings.context("failed to load settings")?;
    if let Some(separator) = cli.separator {
        settings.list.separator = separator;
    }
    debug!(?settings, "effective settings");

    for line in run(cli.command, &settings)? {
        println!("{line}");
    }
    Ok(())
}

/// Executes one subcommand and returns the lines to print on stdout.
fn run(command: Command, settings: &Settings) -> anyhow::Result<Vec<String>> {
    match command {
        Command::Get { file, key, default } => {
            let value = get_value(&file, &key)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match value.or(default) {
                Some(value) => Ok(vec![value]),
                None => bail!("key {key:?} not found in {}", file.display()),
            }
        }
        Command::List { file, key } => {
            let tokens = list_values(&file, &key, settings.list.separator)
                .with_context(|| format!("failed to read {}", file.display()))?;
            match tokens {
                Some(tokens) => Ok(tokens),
                None => bail!("key {key:?} not found in {}", file.display()),
            }
        }
        Command::Dump { file } => {
            dump(&file).with_context(|| format!("failed to read {}", file.display()))
        }
        Command::Set { file, key, value } => {
            let outcome = set_value(&file, &key, &value)
                .with_context(|| format!("failed to set {key:?} in {}", file.display()))?;
            Ok(vec![describe(outcome)])
        }
        Command::Remove { file, key } => {
            let outcome = remove_key(&file, &key)
                .with_context(|| format!("failed to remove {key:?} from {}", file.display()))?;
            Ok(vec![describe(outcome)])
        }
        Command::Copy { src, dst } => {
            let items = copy_file(&src, &dst).with_context(|| {
                format!("failed to copy {} to {}", src.display(), dst.display())
            })?;
            Ok(vec![format!("copied {items} entries")])
        }
        Command::Settings => Ok(vec![settings.to_toml()?]),
    }
}

fn describe(outcome: EditOutcome) -> String {
    match outcome {
        EditOutcome::Created => "created".to_string(),
        EditOutcome::Appended => "appended".to_string(),
        EditOutcome::Updated { occurrences } => format!("updated {occurrences} line(s)"),
        EditOutcome::Removed { occurrences } => format!("removed {occurrences} line(s)"),
        EditOutcome::Unchanged => "unchanged".to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
