use shared::domain::{FeedRate, TravelDistance};

/// Jog parameters as currently selected by the operator. Only the latest
/// values matter; every composition reads them fresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandState {
    travel_distance: TravelDistance,
    feed_rate: FeedRate,
}

impl CommandState {
    pub fn new(travel_distance: TravelDistance, feed_rate: FeedRate) -> Self {
        Self {
            travel_distance,
            feed_rate,
        }
    }

    pub fn travel_distance(&self) -> TravelDistance {
        self.travel_distance
    }

    pub fn feed_rate(&self) -> FeedRate {
        self.feed_rate
    }

    pub fn set_travel_distance(&mut self, distance: TravelDistance) {
        self.travel_distance = distance;
    }

    /// Stores the slider value clamped to the feed-rate range and returns what
    /// was stored.
    pub fn set_feed_rate(&mut self, value: i64) -> FeedRate {
        self.feed_rate = FeedRate::clamped(value);
        self.feed_rate
    }
}
