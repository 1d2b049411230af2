//! Line-oriented machine-control vocabulary: framing, out-of-band signals and
//! interpreter status codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute positioning in millimetres, prefixed to every jog command.
pub const POSITIONING_MODE: &str = "G90G21";

/// Longest line the controller's line buffer accepts.
pub const MAX_LINE_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Single-byte commands that bypass the line parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSignal {
    FeedHold,
    SoftReset,
}

impl ControlSignal {
    pub fn byte(self) -> u8 {
        match self {
            ControlSignal::FeedHold => b'!',
            ControlSignal::SoftReset => 0x18,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'!' => Some(ControlSignal::FeedHold),
            0x18 => Some(ControlSignal::SoftReset),
            _ => None,
        }
    }

    /// Operator-facing label recorded in the console log.
    pub fn label(self) -> &'static str {
        match self {
            ControlSignal::FeedHold => "Paused",
            ControlSignal::SoftReset => "Reset",
        }
    }
}

/// Outcome of executing one line on the local interpreter. Codes follow the
/// Grbl numbering so remote listeners see familiar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    Ok,
    ExpectedCommandLetter,
    BadNumberFormat,
    InvalidStatement,
    GcodeLockedOut,
    LineOverflow,
    UnsupportedCommand,
}

impl StatusCode {
    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }

    pub fn code(self) -> u8 {
        match self {
            StatusCode::Ok => 0,
            StatusCode::ExpectedCommandLetter => 1,
            StatusCode::BadNumberFormat => 2,
            StatusCode::InvalidStatement => 3,
            StatusCode::GcodeLockedOut => 9,
            StatusCode::LineOverflow => 11,
            StatusCode::UnsupportedCommand => 20,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StatusCode::Ok => "ok",
            StatusCode::ExpectedCommandLetter => "expected command letter",
            StatusCode::BadNumberFormat => "bad number format",
            StatusCode::InvalidStatement => "invalid statement",
            StatusCode::GcodeLockedOut => "g-code locked out during alarm",
            StatusCode::LineOverflow => "line overflow",
            StatusCode::UnsupportedCommand => "unsupported command",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            f.write_str("ok")
        } else {
            write!(f, "error:{} {}", self.code(), self.description())
        }
    }
}
