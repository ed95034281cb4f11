//! User settings persisted in local storage.

use serde::{Deserialize, Serialize};

use crate::{decode_record, DomainResult};

pub const SETTINGS_STORAGE_KEY: &str = "taskquest.settings";

/// Longest focus or break period accepted from storage
pub const MAX_PERIOD_MINUTES: u32 = 24 * 60;
/// Most fish the overlay will spawn
pub const MAX_FISH: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub fish_count: usize,
    /// `log` level filter name, e.g. "info" or "debug"
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
            fish_count: 8,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_stored(raw: Option<&str>) -> Self {
        let settings = match raw.map(decode_record::<Settings>) {
            Some(Ok(s)) => s,
            Some(Err(e)) => {
                log::warn!("discarding malformed settings: {}", e);
                Self::default()
            }
            None => Self::default(),
        };
        settings.sanitized()
    }

    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Zero-length periods fall back to defaults; oversized values are capped
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.focus_minutes == 0 {
            self.focus_minutes = defaults.focus_minutes;
        }
        if self.break_minutes == 0 {
            self.break_minutes = defaults.break_minutes;
        }
        self.focus_minutes = self.focus_minutes.min(MAX_PERIOD_MINUTES);
        self.break_minutes = self.break_minutes.min(MAX_PERIOD_MINUTES);
        self.fish_count = self.fish_count.min(MAX_FISH);
        self
    }

    pub fn focus_secs(&self) -> u32 {
        self.focus_minutes.saturating_mul(60)
    }

    pub fn break_secs(&self) -> u32 {
        self.break_minutes.saturating_mul(60)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
