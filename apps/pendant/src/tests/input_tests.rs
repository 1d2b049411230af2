use std::io::Cursor;

use crossbeam_channel::unbounded;

use super::*;

fn jobs() -> Vec<String> {
    vec!["bracket.gcode".to_string(), "plate.nc".to_string()]
}

fn events(input: OperatorInput) -> Vec<InputEvent> {
    match input {
        OperatorInput::Events(events) => events,
        other => panic!("expected events, got {other:?}"),
    }
}

#[test]
fn jog_and_home_target_the_jog_pad() {
    assert_eq!(
        events(parse_operator_line("jog -X", &[])),
        vec![InputEvent::pressed(Widget::JogPad, "-X")]
    );
    assert_eq!(
        events(parse_operator_line("HOME", &[])),
        vec![InputEvent::pressed(Widget::JogPad, "HOME")]
    );
}

#[test]
fn send_types_each_character_then_submits() {
    let typed = events(parse_operator_line("send G0 X1", &[]));
    let tokens: Vec<&str> = typed.iter().map(|event| event.token.as_str()).collect();
    assert_eq!(tokens, vec!["G", "0", " ", "X", "1", "OK"]);
    assert!(typed.iter().all(|event| event.widget == Widget::Keypad));
}

#[test]
fn key_space_and_hold_backspace() {
    assert_eq!(
        events(parse_operator_line("key space", &[])),
        vec![InputEvent::pressed(Widget::Keypad, " ")]
    );
    assert_eq!(
        events(parse_operator_line("hold <", &[])),
        vec![InputEvent::new(Widget::Keypad, EventKind::LongPressed, "<")]
    );
}

#[test]
fn value_changes_carry_their_argument() {
    assert_eq!(
        events(parse_operator_line("distance 0.01", &[])),
        vec![InputEvent::changed(Widget::DistanceList, "0.01")]
    );
    assert_eq!(
        events(parse_operator_line("feed 800\r\n", &[])),
        vec![InputEvent::changed(Widget::FeedSlider, "800")]
    );
}

#[test]
fn files_resolve_by_name_or_index() {
    let jobs = jobs();
    assert_eq!(
        events(parse_operator_line("file plate.nc", &jobs)),
        vec![InputEvent::changed(Widget::FileList, "plate.nc")]
    );
    assert_eq!(
        events(parse_operator_line("file 1", &jobs)),
        vec![InputEvent::changed(Widget::FileList, "bracket.gcode")]
    );
    assert!(matches!(
        parse_operator_line("file 3", &jobs),
        OperatorInput::Unknown(_)
    ));
    assert!(matches!(
        parse_operator_line("file 0", &jobs),
        OperatorInput::Unknown(_)
    ));
}

#[test]
fn control_words_and_unknown_input() {
    assert_eq!(parse_operator_line("quit", &[]), OperatorInput::Quit);
    assert_eq!(parse_operator_line("jobs", &[]), OperatorInput::Jobs);
    assert_eq!(
        events(parse_operator_line("pause", &[])),
        vec![InputEvent::pressed(Widget::JobPad, "PAUSE")]
    );
    assert!(events(parse_operator_line("   ", &[])).is_empty());
    assert_eq!(
        parse_operator_line("distance 7", &[]),
        OperatorInput::Unknown("travel distance must be one of 50, 10, 5.0, 1.0, 0.1, 0.01".into())
    );
    assert!(matches!(
        parse_operator_line("jog", &[]),
        OperatorInput::Unknown(_)
    ));
}

#[test]
fn reader_forwards_lines_and_reports_eof_as_quit() {
    let (tx, rx) = unbounded();
    let handle = spawn_reader(Cursor::new("jog X+\nunlock\n"), jobs(), tx);
    handle.join().expect("reader thread");

    let received: Vec<OperatorInput> = rx.try_iter().collect();
    assert_eq!(
        received,
        vec![
            OperatorInput::Events(vec![InputEvent::pressed(Widget::JogPad, "X+")]),
            OperatorInput::Events(vec![InputEvent::pressed(Widget::JobPad, "POWER")]),
            OperatorInput::Quit,
        ]
    );
}
