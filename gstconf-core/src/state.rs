//! Parser states and the transition table.
//!
//! The grammar is a fixed table keyed by `(State, EventKind)`. Each cell
//! says what the machine does next; a missing cell is a grammar violation.
//!
//! ```text
//! Start        stream-start    -> Stream
//! Stream       document-start  -> Document
//! Stream       stream-end      -> Stop
//! Document     mapping-start   -> Section
//! Document     document-end    -> Stream
//! Section      scalar          -> ActionList     ("actions" only)
//! Section      document-end    -> Stream
//! ActionList   sequence-start  -> ActionValues
//! ActionList   mapping-end     -> Section
//! ActionValues mapping-start   -> ActionKey      (begin action)
//! ActionValues sequence-end    -> ActionList
//! ActionKey    scalar          -> <field state>  (field keyword only)
//! ActionKey    mapping-end     -> ActionValues   (commit action)
//! <field>      scalar          -> ActionKey      (store value)
//! ```

use std::fmt;

use crate::event::EventKind;
use crate::field::Field;

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Nothing consumed yet
    Start,
    /// Inside the stream, between documents
    Stream,
    /// Inside a document, before its top-level mapping
    Document,
    /// Inside the top-level mapping, expecting a section key
    Section,
    /// After the section key, expecting the action sequence
    ActionList,
    /// Inside the action sequence
    ActionValues,
    /// Inside an action mapping, expecting a field key
    ActionKey,
    /// Expecting the value for a field
    Value(Field),
    /// Stream closed; terminal
    Stop,
}

/// What to do for an accepted `(State, EventKind)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to a state; the in-progress action is untouched.
    Goto(State),
    /// Scalar must be the section keyword; moves to `ActionList`.
    Section,
    /// Open a fresh in-progress action; moves to `ActionKey`.
    Begin,
    /// Scalar must be a field keyword; moves to that field's state.
    Key,
    /// Append the in-progress action to the store; moves to `ActionValues`.
    Commit,
    /// Convert the scalar into the field; moves back to `ActionKey`.
    Store(Field),
}

impl State {
    /// Every state, field states in record order.
    pub fn all() -> impl Iterator<Item = State> {
        [
            State::Start,
            State::Stream,
            State::Document,
            State::Section,
            State::ActionList,
            State::ActionValues,
            State::ActionKey,
        ]
        .into_iter()
        .chain(Field::ALL.into_iter().map(State::Value))
        .chain(std::iter::once(State::Stop))
    }

    pub fn name(self) -> &'static str {
        match self {
            State::Start => "Start",
            State::Stream => "Stream",
            State::Document => "Document",
            State::Section => "Section",
            State::ActionList => "ActionList",
            State::ActionValues => "ActionValues",
            State::ActionKey => "ActionKey",
            State::Value(field) => field.state_name(),
            State::Stop => "Stop",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == State::Stop
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the transition table.
pub fn step(state: State, event: EventKind) -> Option<Step> {
    use EventKind as E;

    let step = match (state, event) {
        (State::Start, E::StreamStart) => Step::Goto(State::Stream),

        (State::Stream, E::DocumentStart) => Step::Goto(State::Document),
        (State::Stream, E::StreamEnd) => Step::Goto(State::Stop),

        (State::Document, E::MappingStart) => Step::Goto(State::Section),
        (State::Document, E::DocumentEnd) => Step::Goto(State::Stream),

        (State::Section, E::Scalar) => Step::Section,
        (State::Section, E::DocumentEnd) => Step::Goto(State::Stream),

        (State::ActionList, E::SequenceStart) => Step::Goto(State::ActionValues),
        (State::ActionList, E::MappingEnd) => Step::Goto(State::Section),

        (State::ActionValues, E::MappingStart) => Step::Begin,
        (State::ActionValues, E::SequenceEnd) => Step::Goto(State::ActionList),

        (State::ActionKey, E::Scalar) => Step::Key,
        (State::ActionKey, E::MappingEnd) => Step::Commit,

        (State::Value(field), E::Scalar) => Step::Store(field),

        _ => return None,
    };
    Some(step)
}
