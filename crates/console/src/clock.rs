//! Redraw pacing. The ticker thread owns nothing but the shared counter and
//! a wake-up queue; all console work stays on the event loop.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Sender, TrySendError};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Default)]
pub struct RedrawClock {
    ticks: Arc<AtomicU64>,
}

impl RedrawClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new tick count.
    pub fn advance(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn now(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

/// Advances `clock` every `period` and nudges the event loop. Wake-ups
/// coalesce when the loop is busy; the thread exits once the loop drops its
/// receiver.
pub fn spawn_ticker(clock: RedrawClock, period: Duration, wake: Sender<u64>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(period);
        let tick = clock.advance();
        if let Err(TrySendError::Disconnected(_)) = wake.try_send(tick) {
            break;
        }
    })
}

#[derive(Debug, Default)]
pub struct RedrawPacer {
    last_seen: u64,
}

impl RedrawPacer {
    /// True once per observed clock advance.
    pub fn due(&mut self, clock: &RedrawClock) -> bool {
        let now = clock.now();
        if now == self.last_seen {
            return false;
        }
        self.last_seen = now;
        true
    }
}
