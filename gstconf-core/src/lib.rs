//! gstconf Core Parser
//!
//! Event-driven parser for GPU stress-test action configurations.
//! Consumes a pull-based stream of markup events and builds typed
//! [`Action`] records without ever touching raw text.
//!
//! # Architecture
//!
//! - **event.rs** - Event enum and event kinds (the consumed vocabulary)
//! - **field.rs** - Action fields and the keyword table
//! - **scalar.rs** - Scalar text conversion (lenient and strict)
//! - **action.rs** - The Action record
//! - **store.rs** - Append-only record store
//! - **state.rs** - Parser states and the transition table
//! - **machine.rs** - The state machine driving the table
//! - **source.rs** - EventSource seam (+ YAML-backed source)
//! - **parse.rs** - Driver loop and entry points
//!
//! # Example
//!
//! ```
//! let input = "actions:\n  - name: gemm\n    count: 5\n    parallel: true\n";
//! let actions = gstconf_core::parse_str(input).unwrap();
//!
//! assert_eq!(actions.len(), 1);
//! assert_eq!(actions.as_slice()[0].count, 5);
//! assert!(actions.as_slice()[0].parallel);
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod machine;
pub mod parse;
pub mod scalar;
pub mod source;
pub mod state;
pub mod store;

pub use action::Action;
pub use config::{ParserConfig, Strictness};
pub use error::{Error, GrammarError, SourceError};
pub use event::{Event, EventKind};
pub use field::{Field, FieldKind, SECTION_KEYWORD};
pub use machine::{ActionMachine, Status, Transition};
pub use parse::{parse_events, ActionParser};
#[cfg(feature = "yaml")]
pub use parse::{parse_file, parse_reader, parse_str};
pub use source::{EventSource, Events};
#[cfg(feature = "yaml")]
pub use source::YamlEventSource;
pub use state::{step, State, Step};
pub use store::ActionStore;
