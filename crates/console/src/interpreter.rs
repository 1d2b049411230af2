//! Reference local interpreter: validates a line the way the controller's
//! parser would and tracks the hold/alarm state driven by control signals.

use shared::{
    domain::Axis,
    protocol::{ControlSignal, StatusCode, MAX_LINE_LEN},
};

use crate::dispatcher::LocalInterpreter;

/// Word letters the controller understands.
const SUPPORTED_WORDS: &str = "FGIJKLMNPRSTXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MachineState {
    #[default]
    Idle,
    Hold,
    Alarm,
}

#[derive(Debug, Default)]
pub struct LineInterpreter {
    state: MachineState,
}

impl LineInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    fn system_command(&mut self, block: &str) -> StatusCode {
        match block {
            "$X" => {
                self.state = MachineState::Idle;
                StatusCode::Ok
            }
            "$" | "$$" | "$#" | "$G" | "$I" | "$N" | "$C" => StatusCode::Ok,
            _ if is_homing(block) => {
                self.state = MachineState::Idle;
                StatusCode::Ok
            }
            _ => StatusCode::InvalidStatement,
        }
    }
}

impl LocalInterpreter for LineInterpreter {
    fn execute(&mut self, line: &str) -> StatusCode {
        if line.len() > MAX_LINE_LEN {
            return StatusCode::LineOverflow;
        }

        let block: String = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if block.is_empty() {
            return StatusCode::Ok;
        }
        if block.starts_with('$') {
            return self.system_command(&block);
        }
        if self.state == MachineState::Alarm {
            return StatusCode::GcodeLockedOut;
        }
        parse_block(&block)
    }

    fn signal(&mut self, signal: ControlSignal) {
        self.state = match (signal, self.state) {
            (ControlSignal::FeedHold, MachineState::Idle) => MachineState::Hold,
            (ControlSignal::FeedHold, current) => current,
            (ControlSignal::SoftReset, _) => MachineState::Alarm,
        };
    }
}

/// `$H` homes every axis; `$HX`, `$HXY0` and the like home the named axes.
fn is_homing(block: &str) -> bool {
    let Some(axes) = block.strip_prefix("$H") else {
        return false;
    };
    let axes = axes.strip_suffix('0').unwrap_or(axes);
    axes.chars().all(|letter| Axis::from_letter(letter).is_some())
}

fn parse_block(block: &str) -> StatusCode {
    let bytes = block.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let letter = bytes[i];
        if !letter.is_ascii_alphabetic() {
            return StatusCode::ExpectedCommandLetter;
        }
        i += 1;

        if i < bytes.len() && matches!(bytes[i], b'-' | b'+') {
            i += 1;
        }
        let mut digits = 0;
        let mut seen_dot = false;
        while i < bytes.len() {
            match bytes[i] {
                b'0'..=b'9' => digits += 1,
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            i += 1;
        }

        if digits == 0 {
            return StatusCode::BadNumberFormat;
        }
        if !SUPPORTED_WORDS.contains(char::from(letter)) {
            return StatusCode::UnsupportedCommand;
        }
    }

    StatusCode::Ok
}
