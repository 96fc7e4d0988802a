//! CLI for gstconf.
//!
//! Parses a stress-test action file and prints the resulting actions,
//! one line each or as JSON.

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gstconf_core::{Action, ActionParser, ActionStore, ParserConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// gstconf CLI.
#[derive(Parser, Debug)]
#[command(name = "gstconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action configuration file (YAML).
    pub file: PathBuf,

    /// Reject malformed numbers and flags, and actions without a name.
    #[arg(long)]
    pub strict: bool,

    /// Log every (state, event) pair the parser consumes. Also on when
    /// `DEBUG` is set.
    #[arg(long)]
    pub trace: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `action: ...` line per action.
    Text,
    /// Pretty-printed JSON array.
    Json,
}

impl Cli {
    /// Parser configuration selected by the environment and the flags.
    pub fn parser_config(&self) -> ParserConfig {
        let config = ParserConfig::from_env().strict(self.strict);
        if self.trace {
            config.trace(true)
        } else {
            config
        }
    }
}

/// Run the CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.parser_config();
    init_tracing(config.trace);
    debug!(file = %cli.file.display(), strict = config.is_strict(), format = ?cli.format, "starting");

    let parser = ActionParser::new(config);
    let actions = parser
        .parse_file(&cli.file)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;
    info!(actions = actions.len(), "parsed action file");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_actions(&mut out, &actions, cli.format)?;
    Ok(())
}

/// Write `actions` in the requested format.
pub fn write_actions(out: &mut impl Write, actions: &ActionStore, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            for action in actions {
                writeln!(out, "{}", summary(action))?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, actions)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// One-line summary of an action.
pub fn summary(action: &Action) -> String {
    format!(
        "action: name={},count={}, modname={}",
        action.name, action.count, action.module_name
    )
}

fn init_tracing(trace: bool) {
    let default = if trace { "gstconf::trace=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
