//! The grammar-driven state machine.
//!
//! [`ActionMachine`] owns the current [`State`], the in-progress action and
//! the [`ActionStore`]. Each call to [`ActionMachine::consume`] looks the
//! `(state, event)` pair up in the transition table, applies its effect,
//! and moves on. The first rejected event halts the machine, as does
//! reaching `Stop`; a halted machine refuses every later event without
//! touching the store.

use tracing::{debug, trace};

use crate::action::Action;
use crate::config::ParserConfig;
use crate::error::GrammarError;
use crate::event::{Event, EventKind};
use crate::field::{Field, SECTION_KEYWORD};
use crate::scalar;
use crate::state::{step, State, Step};
use crate::store::ActionStore;

/// Result of consuming one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// More events are expected.
    Continue,
    /// The stream closed; the store is complete.
    Done,
}

/// One accepted event, as reported to a transition observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: State,
    pub event: EventKind,
    pub to: State,
}

type Observer<'o> = Box<dyn FnMut(&Transition) + 'o>;

/// State machine turning markup events into actions.
pub struct ActionMachine<'o> {
    state: State,
    pending: Option<Action>,
    store: ActionStore,
    config: ParserConfig,
    halted: bool,
    observer: Option<Observer<'o>>,
}

impl<'o> ActionMachine<'o> {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            state: State::Start,
            pending: None,
            store: ActionStore::new(),
            config,
            halted: false,
            observer: None,
        }
    }

    /// Call `observer` after every accepted event.
    pub fn observe(mut self, observer: impl FnMut(&Transition) + 'o) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// True once the stream has closed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.is_terminal()
    }

    /// True once the machine stopped or rejected an event.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted || self.is_done()
    }

    /// The action currently being filled, if any.
    pub fn pending(&self) -> Option<&Action> {
        self.pending.as_ref()
    }

    /// Actions committed so far.
    pub fn actions(&self) -> &ActionStore {
        &self.store
    }

    /// Consume one event.
    pub fn consume(&mut self, event: &Event) -> Result<Status, GrammarError> {
        let kind = event.kind();
        let from = self.state;

        if self.config.trace {
            debug!(target: "gstconf::trace", state = %from, event = %kind, "consume");
        } else {
            trace!(state = %from, event = %kind, "consume");
        }

        if self.is_halted() {
            return Err(GrammarError::Halted { state: from });
        }

        match self.apply(event) {
            Ok(to) => {
                self.state = to;
                if let Some(observer) = self.observer.as_mut() {
                    observer(&Transition { from, event: kind, to });
                }
                Ok(if to.is_terminal() { Status::Done } else { Status::Continue })
            }
            Err(err) => {
                debug!(state = %from, event = %kind, error = %err, "event rejected");
                self.halted = true;
                self.pending = None;
                Err(err)
            }
        }
    }

    /// Hand over the store. Only valid once the stream has closed.
    pub fn finish(self) -> Result<ActionStore, GrammarError> {
        if self.is_done() {
            Ok(self.store)
        } else {
            Err(GrammarError::UnexpectedEvent { event: EventKind::StreamEnd, state: self.state })
        }
    }

    /// Resolve the table cell for `event` and perform its effect.
    /// Returns the next state.
    fn apply(&mut self, event: &Event) -> Result<State, GrammarError> {
        let kind = event.kind();
        let state = self.state;
        let Some(cell) = step(state, kind) else {
            return Err(GrammarError::UnexpectedEvent { event: kind, state });
        };

        match cell {
            Step::Goto(next) => Ok(next),

            Step::Section => {
                let value = event.as_scalar().unwrap_or_default();
                if value == SECTION_KEYWORD {
                    Ok(State::ActionList)
                } else {
                    Err(GrammarError::UnexpectedScalar { value: value.to_owned(), state })
                }
            }

            Step::Begin => {
                self.pending = Some(Action::default());
                Ok(State::ActionKey)
            }

            Step::Key => {
                let key = event.as_scalar().unwrap_or_default();
                Field::from_keyword(key)
                    .map(State::Value)
                    .ok_or_else(|| GrammarError::UnknownKey { key: key.to_owned() })
            }

            Step::Commit => {
                let action = self.pending.take().unwrap_or_default();
                if self.config.is_strict() && action.name.is_empty() {
                    return Err(GrammarError::MissingName);
                }
                trace!(name = %action.name, index = self.store.len(), "action committed");
                self.store.push(action);
                Ok(State::ActionValues)
            }

            Step::Store(field) => {
                let text = event.as_scalar().unwrap_or_default();
                let value = scalar::convert(field, text, self.config.strictness)
                    .ok_or_else(|| GrammarError::InvalidValue { field, value: text.to_owned() })?;
                self.pending.get_or_insert_with(Action::default).set(field, value);
                Ok(State::ActionKey)
            }
        }
    }
}

impl Default for ActionMachine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
