//! End-to-end tests from YAML text to action records.

use gstconf_core::{
    parse_str, Action, ActionMachine, ActionParser, Error, Event, EventKind, GrammarError, ParserConfig, SourceError,
    State,
};
use pretty_assertions::assert_eq;

const GST_SINGLE: &str = "\
actions:
- name: action_1
  device: all
  module: gst
  parallel: false
  count: 1
  duration: 5000
  copy_matrix: false
  target_stress: 5000
  matrix_size_a: 8640
  matrix_size_b: 8640
  matrix_size_c: 8640
  ops_type: sgemm
  log_interval: 1000
";

#[test]
fn gst_single_action() {
    let store = parse_str(GST_SINGLE).unwrap();
    assert_eq!(
        store.into_vec(),
        vec![Action {
            name: "action_1".into(),
            module_name: "gst".into(),
            devices: "all".into(),
            count: 1,
            ops_type: "sgemm".into(),
            target_stress: 5000.0,
            duration: 5000,
            matrix_size_a: 8640,
            matrix_size_b: 8640,
            matrix_size_c: 8640,
            log_interval: 1000,
            parallel: false,
            copy_matrix: false,
        }]
    );
}

#[test]
fn actions_in_document_order() {
    let input = "actions:\n  - name: c\n  - name: a\n  - name: b\n";
    let store = parse_str(input).unwrap();
    let names: Vec<&str> = store.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn quoted_values_scenario() {
    let input = r#"{actions: [{name: "a", count: "5", parallel: "true"}, {name: "b"}]}"#;
    let store = parse_str(input).unwrap();
    assert_eq!(
        store.as_slice(),
        &[
            Action {
                count: 5,
                parallel: true,
                ..Action::named("a")
            },
            Action::named("b"),
        ]
    );
}

#[test]
fn empty_stream_has_no_actions() {
    assert!(parse_str("").unwrap().is_empty());
    assert!(parse_str("# only a comment\n").unwrap().is_empty());
    assert!(parse_str("\n\n   \n").unwrap().is_empty());
}

#[test]
fn explicit_empty_document_is_rejected() {
    let err = parse_str("---\n").unwrap_err();
    assert_eq!(
        err.as_grammar(),
        Some(&GrammarError::UnexpectedEvent { event: EventKind::Scalar, state: State::Document })
    );
}

#[test]
fn text_fields_keep_their_spelling() {
    let input = "\
actions:
  - name: 007
    ops_type: 0x10
    module: 1.50
    device: ~
  - name: null
    device:
";
    let store = parse_str(input).unwrap();
    let first = &store.as_slice()[0];
    assert_eq!(first.name, "007");
    assert_eq!(first.ops_type, "0x10");
    assert_eq!(first.module_name, "1.50");
    assert_eq!(first.devices, "~");
    assert_eq!(store.as_slice()[1].name, "null");
    assert_eq!(store.as_slice()[1].devices, "");
}

#[test]
fn hex_count_reads_zero() {
    let store = parse_str("actions:\n  - name: a\n    count: 0x1F\n").unwrap();
    assert_eq!(store.as_slice()[0].count, 0);
}

#[test]
fn repeated_key_overwrites() {
    let store = parse_str("actions:\n  - name: a\n    count: 1\n    count: 2\n").unwrap();
    assert_eq!(store.as_slice()[0].count, 2);
}

#[test]
fn alias_is_a_source_error() {
    let err = parse_str("actions:\n  - name: &n a\n  - name: *n\n").unwrap_err();
    assert!(matches!(err, Error::Source(SourceError::Message(_))), "{:?}", err);
}

#[test]
fn name_only_action_has_zero_values() {
    let store = parse_str("actions:\n  - name: solo\n").unwrap();
    let action = &store.as_slice()[0];
    assert_eq!(action.name, "solo");
    assert_eq!(action.module_name, "");
    assert_eq!(action.devices, "");
    assert_eq!(action.ops_type, "");
    assert_eq!(action.count, 0);
    assert_eq!(action.duration, 0);
    assert_eq!(action.log_interval, 0);
    assert_eq!(action.matrix_sizes(), (0, 0, 0));
    assert_eq!(action.target_stress, 0.0);
    assert!(!action.parallel);
    assert!(!action.copy_matrix);
}

#[test]
fn malformed_count_reads_zero() {
    let store = parse_str("actions:\n  - name: a\n    count: \"abc\"\n").unwrap();
    assert_eq!(store.as_slice()[0].count, 0);
}

#[test]
fn numeric_prefix_is_kept() {
    let store = parse_str("actions:\n  - name: a\n    duration: 30s\n    target_stress: 75%\n").unwrap();
    assert_eq!(store.as_slice()[0].duration, 30);
    assert_eq!(store.as_slice()[0].target_stress, 75.0);
}

#[test]
fn only_literal_true_is_true() {
    let input = "\
actions:
  - name: a
    parallel: yes
    copy_matrix: \"true\"
  - name: b
    parallel: \"TRUE\"
    copy_matrix: 1
";
    let store = parse_str(input).unwrap();
    assert!(!store.as_slice()[0].parallel);
    assert!(store.as_slice()[0].copy_matrix);
    assert!(!store.as_slice()[1].parallel);
    assert!(!store.as_slice()[1].copy_matrix);
}

#[test]
fn unknown_key_is_rejected() {
    let input = "actions:\n  - name: a\n  - name: b\n    colour: red\n  - name: c\n";
    let err = parse_str(input).unwrap_err();
    assert_eq!(err.as_grammar(), Some(&GrammarError::UnknownKey { key: "colour".into() }));
}

#[test]
fn missing_actions_section() {
    let err = parse_str("{other: 1}").unwrap_err();
    let grammar = err.as_grammar().expect("grammar error");
    assert_eq!(grammar.state(), State::Section);
    assert_eq!(err.to_string(), "grammar error: unexpected scalar \"other\" in state Section");
}

#[test]
fn malformed_yaml_is_a_source_error() {
    let err = parse_str("actions: [{name: a\n").unwrap_err();
    assert!(matches!(err, Error::Source(SourceError::Yaml(_))), "{:?}", err);
}

#[test]
fn two_documents() {
    let input = "---\nactions:\n  - name: a\n---\nactions:\n  - name: b\n";
    let store = parse_str(input).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.find("b"), store.get(1));
}

#[test]
fn strict_parser_rejects_unnamed_action() {
    let parser = ActionParser::new(ParserConfig::new().strict(true));
    let err = parser.parse_str("actions:\n  - count: 1\n").unwrap_err();
    assert_eq!(err.as_grammar(), Some(&GrammarError::MissingName));
}

#[test]
fn strict_parser_rejects_malformed_number() {
    let parser = ActionParser::new(ParserConfig::new().strict(true));
    let err = parser.parse_str("actions:\n  - name: a\n    count: \"abc\"\n").unwrap_err();
    assert_eq!(err.to_string(), "grammar error: invalid value \"abc\" for field count in state Count");
}

#[test]
fn parse_reader_matches_parse_str() {
    let from_reader = gstconf_core::parse_reader(GST_SINGLE.as_bytes()).unwrap();
    assert_eq!(from_reader, parse_str(GST_SINGLE).unwrap());
}

#[test]
fn stopped_machine_keeps_its_store() {
    let mut machine = ActionMachine::new();
    let mut source = gstconf_core::YamlEventSource::from_str("actions:\n  - name: a\n");
    while !machine.is_done() {
        let event = gstconf_core::EventSource::next_event(&mut source).unwrap().unwrap();
        machine.consume(&event).unwrap();
    }

    let before = machine.actions().clone();
    for event in [Event::StreamStart, Event::MappingEnd, Event::scalar("name")] {
        assert_eq!(machine.consume(&event), Err(GrammarError::Halted { state: State::Stop }));
    }
    assert_eq!(machine.actions(), &before);
    assert_eq!(machine.finish().unwrap().len(), 1);
}
