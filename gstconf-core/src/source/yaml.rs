//! YAML event source on libyaml.
//!
//! libyaml reports each scalar with the text it was written with, so values
//! reach the machine untouched: `0x10` stays `0x10`, `~` stays `~`, and a key
//! repeated inside one mapping arrives twice. An empty or comment-only
//! stream yields just stream start and end.

use std::borrow::Cow;
use std::io::Read;
use std::mem::{self, MaybeUninit};
use std::slice;

use serde::de::IgnoredAny;
use serde::Deserialize;
use unsafe_libyaml as sys;

use super::EventSource;
use crate::error::SourceError;
use crate::event::Event;

/// Owned libyaml parser over `input`.
struct Parser<'input> {
    // Boxed so it never moves; libyaml keeps a pointer back to the parser.
    raw: Box<MaybeUninit<sys::yaml_parser_t>>,
    input: Cow<'input, [u8]>,
}

impl<'input> Parser<'input> {
    fn new(input: Cow<'input, [u8]>) -> Result<Self, SourceError> {
        let mut raw = Box::new(MaybeUninit::<sys::yaml_parser_t>::uninit());
        // SAFETY: the parser is initialised before use. The input bytes are
        // owned by (or outlive) the returned value and never move, and Drop
        // deletes the parser before they are released.
        unsafe {
            let parser = raw.as_mut_ptr();
            if sys::yaml_parser_initialize(parser).fail {
                return Err(SourceError::Message("out of memory initialising YAML parser".into()));
            }
            sys::yaml_parser_set_input_string(parser, input.as_ptr(), input.len() as u64);
        }
        Ok(Self { raw, input })
    }

    /// Parse the next event. Must not be called again after an error or
    /// after `StreamEnd`.
    fn next(&mut self) -> Result<Event, SourceError> {
        let mut raw_event = MaybeUninit::<sys::yaml_event_t>::uninit();
        // SAFETY: the parser was initialised in `new`. A successfully parsed
        // event is converted, then released exactly once.
        unsafe {
            let event = raw_event.as_mut_ptr();
            if sys::yaml_parser_parse(self.raw.as_mut_ptr(), event).fail {
                return Err(diagnose(&self.input));
            }
            let converted = convert(&*event);
            sys::yaml_event_delete(event);
            converted
        }
    }
}

impl Drop for Parser<'_> {
    fn drop(&mut self) {
        // SAFETY: a `Parser` only exists once initialisation succeeded.
        unsafe { sys::yaml_parser_delete(self.raw.as_mut_ptr()) }
    }
}

/// Map a libyaml event onto the event vocabulary.
///
/// # Safety
///
/// `event` must have been filled by a successful `yaml_parser_parse`.
unsafe fn convert(event: &sys::yaml_event_t) -> Result<Event, SourceError> {
    Ok(match event.type_ {
        sys::YAML_STREAM_START_EVENT => Event::StreamStart,
        sys::YAML_STREAM_END_EVENT => Event::StreamEnd,
        sys::YAML_DOCUMENT_START_EVENT => Event::DocumentStart,
        sys::YAML_DOCUMENT_END_EVENT => Event::DocumentEnd,
        sys::YAML_MAPPING_START_EVENT => Event::MappingStart,
        sys::YAML_MAPPING_END_EVENT => Event::MappingEnd,
        sys::YAML_SEQUENCE_START_EVENT => Event::SequenceStart,
        sys::YAML_SEQUENCE_END_EVENT => Event::SequenceEnd,
        sys::YAML_SCALAR_EVENT => {
            let scalar = event.data.scalar;
            if scalar.value.is_null() || scalar.length == 0 {
                Event::scalar("")
            } else {
                let bytes = slice::from_raw_parts(scalar.value, scalar.length as usize);
                Event::Scalar(String::from_utf8_lossy(bytes).into_owned())
            }
        }
        sys::YAML_ALIAS_EVENT => {
            return Err(SourceError::Message(format!(
                "unsupported alias at line {} column {}",
                event.start_mark.line + 1,
                event.start_mark.column + 1
            )))
        }
        _ => return Err(SourceError::Message("unrecognised YAML event".into())),
    })
}

/// Explain why libyaml rejected `input`, through serde_yaml's diagnostics.
fn diagnose(input: &[u8]) -> SourceError {
    for document in serde_yaml::Deserializer::from_slice(input) {
        if let Err(err) = IgnoredAny::deserialize(document) {
            return SourceError::Yaml(err);
        }
    }
    SourceError::Message("malformed YAML".into())
}

enum Phase<'input> {
    Parsing(Parser<'input>),
    /// Reported on the first pull.
    Failed(SourceError),
    Done,
}

/// Event source over YAML text.
///
/// Events come straight from libyaml in document order. Scalars carry their
/// source text whatever their style; tags and anchors are dropped. Aliases
/// are rejected as a source error.
pub struct YamlEventSource<'input> {
    phase: Phase<'input>,
}

impl<'input> YamlEventSource<'input> {
    pub fn from_str(input: &'input str) -> Self {
        Self::from_slice(input.as_bytes())
    }

    pub fn from_slice(input: &'input [u8]) -> Self {
        Self::new(Cow::Borrowed(input))
    }

    /// Read `reader` to the end, then parse. A read failure is reported by
    /// the first `next_event`.
    pub fn from_reader<R: Read>(mut reader: R) -> Self {
        let mut buffer = Vec::new();
        match reader.read_to_end(&mut buffer) {
            Ok(_) => Self::new(Cow::Owned(buffer)),
            Err(err) => Self { phase: Phase::Failed(err.into()) },
        }
    }

    fn new(input: Cow<'input, [u8]>) -> Self {
        let phase = match Parser::new(input) {
            Ok(parser) => Phase::Parsing(parser),
            Err(err) => Phase::Failed(err),
        };
        Self { phase }
    }
}

impl EventSource for YamlEventSource<'_> {
    fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
        match mem::replace(&mut self.phase, Phase::Done) {
            Phase::Parsing(mut parser) => {
                let event = parser.next()?;
                if event != Event::StreamEnd {
                    self.phase = Phase::Parsing(parser);
                }
                Ok(Some(event))
            }
            Phase::Failed(err) => Err(err),
            Phase::Done => Ok(None),
        }
    }
}
