//! Shared helpers for the integration tests.
//!
//! Builds event streams directly so grammar tests do not depend on the
//! YAML source.

#![allow(dead_code)]

use gstconf_core::Event;

/// Key/value pairs of one action mapping, in document order.
pub type Pairs<'a> = &'a [(&'a str, &'a str)];

/// Events for one action mapping.
pub fn action(pairs: Pairs<'_>) -> Vec<Event> {
    let mut events = vec![Event::MappingStart];
    for (key, value) in pairs {
        events.push(Event::scalar(*key));
        events.push(Event::scalar(*value));
    }
    events.push(Event::MappingEnd);
    events
}

/// Events for one `{actions: [...]}` document, without stream markers.
pub fn document(actions: &[Pairs<'_>]) -> Vec<Event> {
    let mut events = vec![
        Event::DocumentStart,
        Event::MappingStart,
        Event::scalar("actions"),
        Event::SequenceStart,
    ];
    for pairs in actions {
        events.extend(action(pairs));
    }
    events.extend([Event::SequenceEnd, Event::MappingEnd, Event::DocumentEnd]);
    events
}

/// A complete stream holding one document.
pub fn stream(actions: &[Pairs<'_>]) -> Vec<Event> {
    wrap(document(actions))
}

/// Surround `events` with stream markers.
pub fn wrap(events: Vec<Event>) -> Vec<Event> {
    let mut out = Vec::with_capacity(events.len() + 2);
    out.push(Event::StreamStart);
    out.extend(events);
    out.push(Event::StreamEnd);
    out
}
