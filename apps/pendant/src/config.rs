use std::{
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use console::ConsoleConfig;
use serde::Deserialize;
use shared::{
    domain::{FeedRate, TravelDistance},
    protocol::{LineTerminator, MAX_LINE_LEN},
};

pub const DEFAULT_SETTINGS_FILE: &str = "pendant.toml";
const ENV_PREFIX: &str = "PENDANT__";
const MIN_TICK_PERIOD_MS: u64 = 10;

const LOG_CAPACITY_RANGE: RangeInclusive<usize> = 16..=64 * 1024;
const KEYPAD_MAX_LEN_RANGE: RangeInclusive<usize> = 1..=MAX_LINE_LEN;
const MIRROR_QUEUE_RANGE: RangeInclusive<usize> = 1..=4096;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_capacity: usize,
    pub keypad_max_len: usize,
    pub tick_period_ms: u64,
    pub travel_distance: TravelDistance,
    pub feed_rate: FeedRate,
    pub line_terminator: LineTerminator,
    pub jobs_dir: PathBuf,
    pub mirror_addr: Option<String>,
    pub mirror_queue: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_capacity: 512,
            keypad_max_len: 32,
            tick_period_ms: 120,
            travel_distance: TravelDistance::default(),
            feed_rate: FeedRate::default(),
            line_terminator: LineTerminator::Lf,
            jobs_dir: "./jobs".into(),
            mirror_addr: None,
            mirror_queue: 64,
        }
    }
}

impl Settings {
    pub fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            log_capacity: self.log_capacity,
            keypad_max_len: self.keypad_max_len,
            terminator: self.line_terminator,
            travel_distance: self.travel_distance,
            feed_rate: self.feed_rate,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(MIN_TICK_PERIOD_MS))
    }
}

/// Defaults, then the settings file, then `PENDANT__*` environment overrides.
/// An explicitly requested file must be readable; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
            read_settings_file(Path::new(DEFAULT_SETTINGS_FILE))?
        }
        None => Settings::default(),
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    Ok(parse_settings(&raw, path))
}

fn parse_settings(raw: &str, origin: &Path) -> Settings {
    match toml::from_str::<Settings>(raw) {
        Ok(mut settings) => {
            enforce_limits(&mut settings);
            settings
        }
        Err(error) => {
            tracing::warn!(
                path = %origin.display(),
                %error,
                "invalid settings file; using defaults"
            );
            Settings::default()
        }
    }
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |key: &str| lookup(&format!("{ENV_PREFIX}{key}"));

    if let Some(v) = var("LOG_CAPACITY") {
        override_parsed(&mut settings.log_capacity, "LOG_CAPACITY", &v);
    }
    if let Some(v) = var("KEYPAD_MAX_LEN") {
        override_parsed(&mut settings.keypad_max_len, "KEYPAD_MAX_LEN", &v);
    }
    if let Some(v) = var("TICK_PERIOD_MS") {
        override_parsed(&mut settings.tick_period_ms, "TICK_PERIOD_MS", &v);
    }
    if let Some(v) = var("MIRROR_QUEUE") {
        override_parsed(&mut settings.mirror_queue, "MIRROR_QUEUE", &v);
    }
    if let Some(v) = var("TRAVEL_DISTANCE") {
        match TravelDistance::try_from(v) {
            Ok(distance) => settings.travel_distance = distance,
            Err(error) => tracing::warn!(%error, "ignoring environment override"),
        }
    }
    if let Some(v) = var("FEED_RATE") {
        let mut raw = i64::from(settings.feed_rate.get());
        override_parsed(&mut raw, "FEED_RATE", &v);
        settings.feed_rate = FeedRate::clamped(raw);
    }
    if let Some(v) = var("JOBS_DIR") {
        settings.jobs_dir = PathBuf::from(v);
    }
    if let Some(v) = var("MIRROR_ADDR") {
        settings.mirror_addr = (!v.trim().is_empty()).then_some(v);
    }
    enforce_limits(settings);
}

/// Sizes that back preallocated buffers and queues must stay within range;
/// anything else reverts to its default.
fn enforce_limits(settings: &mut Settings) {
    let defaults = Settings::default();
    within(
        &mut settings.log_capacity,
        "log_capacity",
        LOG_CAPACITY_RANGE,
        defaults.log_capacity,
    );
    within(
        &mut settings.keypad_max_len,
        "keypad_max_len",
        KEYPAD_MAX_LEN_RANGE,
        defaults.keypad_max_len,
    );
    within(
        &mut settings.mirror_queue,
        "mirror_queue",
        MIRROR_QUEUE_RANGE,
        defaults.mirror_queue,
    );
}

fn within(slot: &mut usize, key: &str, range: RangeInclusive<usize>, default: usize) {
    if !range.contains(&*slot) {
        tracing::warn!(
            key,
            value = *slot,
            min = *range.start(),
            max = *range.end(),
            "setting out of range; using default"
        );
        *slot = default;
    }
}

fn override_parsed<V: std::str::FromStr>(slot: &mut V, key: &str, value: &str) {
    match value.trim().parse() {
        Ok(parsed) => *slot = parsed,
        Err(_) => tracing::warn!(key, value, "ignoring unparsable environment override"),
    }
}
