//! Markup events - the input vocabulary of the action parser.
//!
//! This is a pull-style event model in the shape of a YAML event stream:
//! structure is represented by start/end pairs and leaf values arrive as
//! scalars. The parser never sees raw text, only these events.
//!
//! ## Event Sequences
//!
//! A document holding a single action `{actions: [{name: gemm}]}` emits:
//! ```text
//! StreamStart
//! DocumentStart
//! MappingStart
//! Scalar("actions")
//! SequenceStart
//! MappingStart
//! Scalar("name")
//! Scalar("gemm")
//! MappingEnd
//! SequenceEnd
//! MappingEnd
//! DocumentEnd
//! StreamEnd
//! ```

use std::fmt;

/// A single event from an [`EventSource`](crate::EventSource).
///
/// Events own their scalar text, so an event can be dropped as soon as
/// the machine has consumed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // ========== Stream Events ==========
    StreamStart,
    StreamEnd,

    // ========== Document Events ==========
    DocumentStart,
    DocumentEnd,

    // ========== Collection Events ==========
    MappingStart,
    MappingEnd,
    SequenceStart,
    SequenceEnd,

    // ========== Value Events ==========
    /// Scalar value, keys included.
    Scalar(String),
}

/// Payload-free tag of an [`Event`], used as the column of the
/// transition table and in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventKind {
    StreamStart = 0,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    MappingStart,
    MappingEnd,
    SequenceStart,
    SequenceEnd,
    Scalar,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; 9] = [
        EventKind::StreamStart,
        EventKind::StreamEnd,
        EventKind::DocumentStart,
        EventKind::DocumentEnd,
        EventKind::MappingStart,
        EventKind::MappingEnd,
        EventKind::SequenceStart,
        EventKind::SequenceEnd,
        EventKind::Scalar,
    ];

    /// Human-readable name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::StreamStart => "stream-start",
            Self::StreamEnd => "stream-end",
            Self::DocumentStart => "document-start",
            Self::DocumentEnd => "document-end",
            Self::MappingStart => "mapping-start",
            Self::MappingEnd => "mapping-end",
            Self::SequenceStart => "sequence-start",
            Self::SequenceEnd => "sequence-end",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Event {
    /// Build a scalar event.
    #[inline]
    pub fn scalar(value: impl Into<String>) -> Self {
        Event::Scalar(value.into())
    }

    /// Get the kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StreamStart => EventKind::StreamStart,
            Event::StreamEnd => EventKind::StreamEnd,
            Event::DocumentStart => EventKind::DocumentStart,
            Event::DocumentEnd => EventKind::DocumentEnd,
            Event::MappingStart => EventKind::MappingStart,
            Event::MappingEnd => EventKind::MappingEnd,
            Event::SequenceStart => EventKind::SequenceStart,
            Event::SequenceEnd => EventKind::SequenceEnd,
            Event::Scalar(_) => EventKind::Scalar,
        }
    }

    /// Scalar text, if this is a scalar event.
    #[inline]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Event::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Check if this is a structure start event (has matching end).
    pub fn is_structure_start(&self) -> bool {
        matches!(
            self,
            Event::StreamStart | Event::DocumentStart | Event::MappingStart | Event::SequenceStart
        )
    }

    /// Check if this is a structure end event.
    pub fn is_structure_end(&self) -> bool {
        matches!(
            self,
            Event::StreamEnd | Event::DocumentEnd | Event::MappingEnd | Event::SequenceEnd
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Scalar(value) => write!(f, "scalar {:?}", value),
            other => f.write_str(other.kind().name()),
        }
    }
}
