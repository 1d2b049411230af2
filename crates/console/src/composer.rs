//! Turns an [`Action`] into the protocol text to run. Each composition
//! starts from a fresh buffer; nothing carries over between calls.

use shared::{
    domain::{Axis, Direction},
    protocol::{ControlSignal, POSITIONING_MODE},
};

use crate::{
    command_state::CommandState,
    events::{Action, Setting},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// One line to execute, mirror and log.
    Line(String),
    /// Lines executed one after another, reported under a single summary.
    Sequence { lines: Vec<String>, summary: String },
    Signal(ControlSignal),
    /// Configuration change; only echoed to the log.
    Echo(String),
}

/// Builds `G90G21<axis>[-]<distance>F<feed>` from the parameters as they are
/// right now. Values are copied verbatim; range checks belong to the
/// interpreter.
pub fn jog_command(state: &CommandState, axis: Axis, direction: Direction) -> String {
    format!(
        "{POSITIONING_MODE}{axis}{}{}F{}",
        direction.sign(),
        state.travel_distance(),
        state.feed_rate()
    )
}

pub fn home_command(axis: Axis) -> String {
    format!("$H{axis}0")
}

fn home_summary(axes: &[Axis]) -> String {
    let names = axes
        .iter()
        .map(|axis| axis.letter().to_string())
        .collect::<Vec<_>>()
        .join("&");
    format!("Home {names}")
}

/// Applies a configuration change to `state` and returns the log echo.
pub fn configure(state: &mut CommandState, setting: &Setting) -> String {
    match setting {
        Setting::TravelDistance(distance) => {
            state.set_travel_distance(*distance);
            format!("Travel distance set to {distance} mm\n")
        }
        Setting::FeedRate(value) => {
            let stored = state.set_feed_rate(*value);
            format!("Feed rate set to {stored}\n")
        }
        Setting::SelectedFile(name) => format!("{name} selected.\n"),
    }
}

pub fn compose(state: &mut CommandState, action: &Action) -> Composition {
    match action {
        Action::Jog { axis, direction } => Composition::Line(jog_command(state, *axis, *direction)),
        Action::Home(axes) => Composition::Sequence {
            lines: axes.iter().copied().map(home_command).collect(),
            summary: home_summary(axes),
        },
        Action::Configure(setting) => Composition::Echo(configure(state, setting)),
        Action::Raw(text) => Composition::Line(text.clone()),
        Action::Signal(signal) => Composition::Signal(*signal),
    }
}

#[cfg(test)]
#[path = "tests/composer_tests.rs"]
mod tests;
