//! Driver loop and entry points.
//!
//! The driver pulls one event at a time from an [`EventSource`] and hands
//! it to an [`ActionMachine`] until the machine reaches `Stop`. Each event
//! is dropped before the next one is requested. Any failure aborts the run
//! and no partial store is returned.

#[cfg(feature = "yaml")]
use std::fs::File;
#[cfg(feature = "yaml")]
use std::io::{BufReader, Read};
#[cfg(feature = "yaml")]
use std::path::Path;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Error;
use crate::machine::{ActionMachine, Status};
use crate::source::EventSource;
#[cfg(feature = "yaml")]
use crate::source::YamlEventSource;
use crate::store::ActionStore;

/// Parse actions with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ActionParser {
    config: ParserConfig,
}

impl ActionParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Run the pump loop over `source`.
    pub fn parse_events<S: EventSource>(&self, mut source: S) -> Result<ActionStore, Error> {
        let mut machine = ActionMachine::with_config(self.config.clone());
        let mut consumed = 0usize;

        loop {
            let Some(event) = source.next_event()? else {
                return Err(Error::UnexpectedEnd { state: machine.state() });
            };
            consumed += 1;
            if machine.consume(&event)? == Status::Done {
                break;
            }
        }

        let store = machine.finish()?;
        debug!(events = consumed, actions = store.len(), "parse complete");
        Ok(store)
    }

    #[cfg(feature = "yaml")]
    pub fn parse_str(&self, input: &str) -> Result<ActionStore, Error> {
        self.parse_events(YamlEventSource::from_str(input))
    }

    #[cfg(feature = "yaml")]
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ActionStore, Error> {
        self.parse_events(YamlEventSource::from_reader(reader))
    }

    /// Open and parse a configuration file.
    #[cfg(feature = "yaml")]
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ActionStore, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "parsing action file");
        self.parse_reader(BufReader::new(file))
    }
}

/// Run the pump loop over `source` with `config`.
pub fn parse_events<S: EventSource>(source: S, config: &ParserConfig) -> Result<ActionStore, Error> {
    ActionParser::new(config.clone()).parse_events(source)
}

/// Parse YAML text with the default configuration.
#[cfg(feature = "yaml")]
pub fn parse_str(input: &str) -> Result<ActionStore, Error> {
    ActionParser::default().parse_str(input)
}

/// Parse YAML from a reader with the default configuration.
#[cfg(feature = "yaml")]
pub fn parse_reader<R: Read>(reader: R) -> Result<ActionStore, Error> {
    ActionParser::default().parse_reader(reader)
}

/// Parse a YAML file with the default configuration.
#[cfg(feature = "yaml")]
pub fn parse_file(path: impl AsRef<Path>) -> Result<ActionStore, Error> {
    ActionParser::default().parse_file(path)
}
