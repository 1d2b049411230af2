use super::*;

fn act(event: InputEvent) -> Action {
    match translate(&event) {
        Some(Intent::Act(action)) => action,
        other => panic!("expected action for {event:?}, got {other:?}"),
    }
}

#[test]
fn jog_pad_labels_map_to_axis_and_direction() {
    assert_eq!(
        act(InputEvent::pressed(Widget::JogPad, "X+")),
        Action::Jog {
            axis: Axis::X,
            direction: Direction::Positive
        }
    );
    assert_eq!(
        act(InputEvent::pressed(Widget::JogPad, "-Y")),
        Action::Jog {
            axis: Axis::Y,
            direction: Direction::Negative
        }
    );
    assert_eq!(
        act(InputEvent::pressed(Widget::JogPad, "Z-")),
        Action::Jog {
            axis: Axis::Z,
            direction: Direction::Negative
        }
    );
}

#[test]
fn home_button_homes_x_then_y() {
    assert_eq!(
        act(InputEvent::pressed(Widget::JogPad, "home")),
        Action::Home(vec![Axis::X, Axis::Y])
    );
}

#[test]
fn hidden_and_unknown_jog_buttons_do_nothing() {
    for label in ["A+", "A-", "", "XY+", "X"] {
        assert_eq!(translate(&InputEvent::pressed(Widget::JogPad, label)), None);
    }
}

#[test]
fn keypad_presses_become_edits() {
    assert_eq!(
        translate(&InputEvent::pressed(Widget::Keypad, "G")),
        Some(Intent::Edit(KeypadEdit::Insert("G".into())))
    );
    assert_eq!(
        translate(&InputEvent::pressed(Widget::Keypad, " ")),
        Some(Intent::Edit(KeypadEdit::Insert(" ".into())))
    );
    assert_eq!(
        translate(&InputEvent::pressed(Widget::Keypad, "<")),
        Some(Intent::Edit(KeypadEdit::Backspace))
    );
    assert_eq!(
        translate(&InputEvent::new(Widget::Keypad, EventKind::LongPressed, "<")),
        Some(Intent::Edit(KeypadEdit::Clear))
    );
    assert_eq!(
        translate(&InputEvent::pressed(Widget::Keypad, "OK")),
        Some(Intent::Edit(KeypadEdit::Submit))
    );
    assert_eq!(
        translate(&InputEvent::new(Widget::Keypad, EventKind::LongPressed, "7")),
        None
    );
}

#[test]
fn job_pad_maps_unlock_to_a_line_and_the_rest_to_signals() {
    assert_eq!(
        act(InputEvent::pressed(Widget::JobPad, "power")),
        Action::Raw("$X".into())
    );
    assert_eq!(
        act(InputEvent::pressed(Widget::JobPad, "PAUSE")),
        Action::Signal(ControlSignal::FeedHold)
    );
    assert_eq!(
        act(InputEvent::pressed(Widget::JobPad, "reset")),
        Action::Signal(ControlSignal::SoftReset)
    );
    assert_eq!(translate(&InputEvent::pressed(Widget::JobPad, "PLAY")), None);
}

#[test]
fn value_changes_become_configure_actions() {
    assert_eq!(
        act(InputEvent::changed(Widget::DistanceList, "0.1")),
        Action::Configure(Setting::TravelDistance(TravelDistance::Tenth))
    );
    assert_eq!(
        act(InputEvent::changed(Widget::FeedSlider, " 1200")),
        Action::Configure(Setting::FeedRate(1200))
    );
    assert_eq!(
        act(InputEvent::changed(Widget::FileList, "part.gcode")),
        Action::Configure(Setting::SelectedFile("part.gcode".into()))
    );
    assert_eq!(translate(&InputEvent::changed(Widget::DistanceList, "7")), None);
    assert_eq!(translate(&InputEvent::changed(Widget::FeedSlider, "fast")), None);
    assert_eq!(translate(&InputEvent::changed(Widget::FileList, "  ")), None);
}
