use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Sign marker written between the axis letter and the distance.
    pub fn sign(self) -> &'static str {
        match self {
            Direction::Positive => "",
            Direction::Negative => "-",
        }
    }
}

/// Jog step sizes offered by the travel-distance selector, in millimetres.
///
/// The labels are carried verbatim into composed commands, so `5.0` stays `5.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TravelDistance {
    Fifty,
    #[default]
    Ten,
    Five,
    One,
    Tenth,
    Hundredth,
}

impl TravelDistance {
    /// Selector order, largest step first.
    pub const ALL: [TravelDistance; 6] = [
        TravelDistance::Fifty,
        TravelDistance::Ten,
        TravelDistance::Five,
        TravelDistance::One,
        TravelDistance::Tenth,
        TravelDistance::Hundredth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TravelDistance::Fifty => "50",
            TravelDistance::Ten => "10",
            TravelDistance::Five => "5.0",
            TravelDistance::One => "1.0",
            TravelDistance::Tenth => "0.1",
            TravelDistance::Hundredth => "0.01",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|distance| distance.as_str() == label)
    }

    /// Newline-delimited option list in selector order.
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|distance| distance.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for TravelDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TravelDistance {
    type Error = ConsoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or(ConsoleError::InvalidSetting {
            key: "travel_distance",
            value,
        })
    }
}

impl From<TravelDistance> for String {
    fn from(value: TravelDistance) -> Self {
        value.as_str().to_string()
    }
}

/// Feed rate in mm/min, always inside `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct FeedRate(u32);

impl FeedRate {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 2000;

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for FeedRate {
    fn default() -> Self {
        Self(500)
    }
}

impl From<i64> for FeedRate {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<FeedRate> for u32 {
    fn from(value: FeedRate) -> Self {
        value.0
    }
}

impl fmt::Display for FeedRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
