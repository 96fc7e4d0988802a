//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::event::EventKind;
use crate::field::Field;
use crate::state::State;

/// The event source could not produce the next event.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Malformed YAML
    #[cfg(feature = "yaml")]
    #[error("malformed document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure reported by a custom source
    #[error("{0}")]
    Message(String),
}

/// An event that the grammar does not allow where it appeared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrammarError {
    #[error("unexpected {event} event in state {state}")]
    UnexpectedEvent { event: EventKind, state: State },

    /// Top-level key other than `actions`
    #[error("unexpected scalar {value:?} in state {state}")]
    UnexpectedScalar { value: String, state: State },

    #[error("unknown key {key:?} in state ActionKey")]
    UnknownKey { key: String },

    /// Malformed scalar (strict mode only)
    #[error("invalid value {value:?} for field {field} in state {state}", state = .field.state_name())]
    InvalidValue { field: Field, value: String },

    /// Action mapping closed without a name (strict mode only)
    #[error("action without a name in state ActionKey")]
    MissingName,

    /// The machine already stopped or failed
    #[error("parser halted in state {state}; no further events are accepted")]
    Halted { state: State },
}

impl GrammarError {
    /// State in which the error occurred.
    pub fn state(&self) -> State {
        match self {
            GrammarError::UnexpectedEvent { state, .. } => *state,
            GrammarError::UnexpectedScalar { state, .. } => *state,
            GrammarError::UnknownKey { .. } | GrammarError::MissingName => State::ActionKey,
            GrammarError::InvalidValue { field, .. } => State::Value(*field),
            GrammarError::Halted { state } => *state,
        }
    }
}

/// Error returned by the parse entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("event source error: {0}")]
    Source(#[from] SourceError),

    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// The source ran dry before the stream closed
    #[error("event stream ended in state {state}")]
    UnexpectedEnd { state: State },

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The grammar error, if this is one.
    pub fn as_grammar(&self) -> Option<&GrammarError> {
        match self {
            Error::Grammar(err) => Some(err),
            _ => None,
        }
    }
}
