//! Input events from the widget layer and their translation into console
//! intents. Widget labels are interpreted here and nowhere else.

use shared::{
    domain::{Axis, Direction, TravelDistance},
    protocol::ControlSignal,
};

pub const HOME_LABEL: &str = "HOME";
pub const BACKSPACE_LABEL: &str = "<";
pub const SUBMIT_LABEL: &str = "OK";
pub const UNLOCK_LABEL: &str = "POWER";
pub const PAUSE_LABEL: &str = "PAUSE";
pub const RESET_LABEL: &str = "RESET";

/// Axes homed by the home button, in execution order.
pub const HOME_ORDER: [Axis; 2] = [Axis::X, Axis::Y];

/// System command that clears an alarm lock.
pub const UNLOCK_COMMAND: &str = "$X";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    JogPad,
    Keypad,
    JobPad,
    DistanceList,
    FeedSlider,
    FileList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Pressed,
    LongPressed,
    ValueChanged,
}

/// A normalized widget event: which widget, what happened, and the button
/// label or selected value that identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub widget: Widget,
    pub kind: EventKind,
    pub token: String,
}

impl InputEvent {
    pub fn new(widget: Widget, kind: EventKind, token: impl Into<String>) -> Self {
        Self {
            widget,
            kind,
            token: token.into(),
        }
    }

    pub fn pressed(widget: Widget, token: impl Into<String>) -> Self {
        Self::new(widget, EventKind::Pressed, token)
    }

    pub fn changed(widget: Widget, token: impl Into<String>) -> Self {
        Self::new(widget, EventKind::ValueChanged, token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    TravelDistance(TravelDistance),
    FeedRate(i64),
    SelectedFile(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Jog { axis: Axis, direction: Direction },
    Home(Vec<Axis>),
    Configure(Setting),
    Raw(String),
    Signal(ControlSignal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypadEdit {
    Insert(String),
    Backspace,
    Clear,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Act(Action),
    Edit(KeypadEdit),
}

pub fn translate(event: &InputEvent) -> Option<Intent> {
    let token = event.token.as_str();
    match (event.widget, event.kind) {
        (Widget::JogPad, EventKind::Pressed) => {
            if token.eq_ignore_ascii_case(HOME_LABEL) {
                return Some(Intent::Act(Action::Home(HOME_ORDER.to_vec())));
            }
            parse_jog_label(token).map(|(axis, direction)| Intent::Act(Action::Jog { axis, direction }))
        }
        (Widget::Keypad, EventKind::Pressed) => Some(Intent::Edit(match token {
            BACKSPACE_LABEL => KeypadEdit::Backspace,
            SUBMIT_LABEL => KeypadEdit::Submit,
            "" => return None,
            key => KeypadEdit::Insert(key.to_string()),
        })),
        (Widget::Keypad, EventKind::LongPressed) if token == BACKSPACE_LABEL => {
            Some(Intent::Edit(KeypadEdit::Clear))
        }
        (Widget::JobPad, EventKind::Pressed) => {
            let action = if token.eq_ignore_ascii_case(UNLOCK_LABEL) {
                Action::Raw(UNLOCK_COMMAND.to_string())
            } else if token.eq_ignore_ascii_case(PAUSE_LABEL) {
                Action::Signal(ControlSignal::FeedHold)
            } else if token.eq_ignore_ascii_case(RESET_LABEL) {
                Action::Signal(ControlSignal::SoftReset)
            } else {
                return None;
            };
            Some(Intent::Act(action))
        }
        (Widget::DistanceList, EventKind::ValueChanged) => TravelDistance::from_label(token)
            .map(|distance| Intent::Act(Action::Configure(Setting::TravelDistance(distance)))),
        (Widget::FeedSlider, EventKind::ValueChanged) => token
            .trim()
            .parse::<i64>()
            .ok()
            .map(|value| Intent::Act(Action::Configure(Setting::FeedRate(value)))),
        (Widget::FileList, EventKind::ValueChanged) => {
            let name = token.trim();
            (!name.is_empty())
                .then(|| Intent::Act(Action::Configure(Setting::SelectedFile(name.to_string()))))
        }
        _ => None,
    }
}

/// Accepts both `X+`/`X-` and `-X` spellings. Axes the machine lacks yield `None`.
fn parse_jog_label(label: &str) -> Option<(Axis, Direction)> {
    let label = label.trim();
    let (axis, direction) = if let Some(rest) = label.strip_prefix('-') {
        (rest, Direction::Negative)
    } else if let Some(rest) = label.strip_suffix('-') {
        (rest, Direction::Negative)
    } else if let Some(rest) = label.strip_suffix('+') {
        (rest, Direction::Positive)
    } else {
        return None;
    };

    let mut letters = axis.chars();
    match (letters.next(), letters.next()) {
        (Some(letter), None) => Axis::from_letter(letter).map(|axis| (axis, direction)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
