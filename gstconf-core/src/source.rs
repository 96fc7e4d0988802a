//! Event sources.
//!
//! The parser pulls events through [`EventSource`]; it does not know how
//! they were produced. [`Events`] adapts a plain iterator and
//! [`YamlEventSource`] (feature `yaml`) produces events from YAML text.

use crate::error::SourceError;
use crate::event::Event;

/// Pull-based producer of markup events.
pub trait EventSource {
    /// Next event, or `None` once the source is exhausted.
    fn next_event(&mut self) -> Result<Option<Event>, SourceError>;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
        (**self).next_event()
    }
}

/// Infallible source over any iterator of events.
#[derive(Debug, Clone)]
pub struct Events<I> {
    inner: I,
}

impl<I> Events<I>
where
    I: Iterator<Item = Event>,
{
    pub fn new(events: impl IntoIterator<IntoIter = I>) -> Self {
        Self { inner: events.into_iter() }
    }
}

impl<I> EventSource for Events<I>
where
    I: Iterator<Item = Event>,
{
    #[inline]
    fn next_event(&mut self) -> Result<Option<Event>, SourceError> {
        Ok(self.inner.next())
    }
}

#[cfg(feature = "yaml")]
pub use self::yaml::YamlEventSource;

#[cfg(feature = "yaml")]
mod yaml;
