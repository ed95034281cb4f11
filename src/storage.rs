//! Local Storage Bindings
//!
//! Browser `localStorage` access for the persisted records.
//! Read failures fall back to each record's defaults; write failures are logged.

use taskquest_core::nav::{Theme, THEME_STORAGE_KEY};
use taskquest_core::pet::{PetFish, PET_STORAGE_KEY};
use taskquest_core::settings::{Settings, SETTINGS_STORAGE_KEY};
use taskquest_core::streak::{StreakData, STREAK_STORAGE_KEY};
use taskquest_core::task_tree::{TreeProgress, TREE_STORAGE_KEY};
use taskquest_core::DomainResult;

/// A record stored under a fixed key
pub trait Persisted: Sized {
    const KEY: &'static str;

    fn decode(raw: Option<&str>) -> Self;
    fn encode(&self) -> DomainResult<String>;
}

impl Persisted for StreakData {
    const KEY: &'static str = STREAK_STORAGE_KEY;

    fn decode(raw: Option<&str>) -> Self {
        StreakData::from_stored(raw)
    }

    fn encode(&self) -> DomainResult<String> {
        self.to_json()
    }
}

impl Persisted for PetFish {
    const KEY: &'static str = PET_STORAGE_KEY;

    fn decode(raw: Option<&str>) -> Self {
        PetFish::from_stored(raw)
    }

    fn encode(&self) -> DomainResult<String> {
        self.to_json()
    }
}

impl Persisted for Settings {
    const KEY: &'static str = SETTINGS_STORAGE_KEY;

    fn decode(raw: Option<&str>) -> Self {
        Settings::from_stored(raw)
    }

    fn encode(&self) -> DomainResult<String> {
        self.to_json()
    }
}

impl Persisted for TreeProgress {
    const KEY: &'static str = TREE_STORAGE_KEY;

    fn decode(raw: Option<&str>) -> Self {
        TreeProgress::from_stored(raw)
    }

    fn encode(&self) -> DomainResult<String> {
        self.to_json()
    }
}

// Stored as the bare string, not JSON
impl Persisted for Theme {
    const KEY: &'static str = THEME_STORAGE_KEY;

    fn decode(raw: Option<&str>) -> Self {
        Theme::from_stored(raw)
    }

    fn encode(&self) -> DomainResult<String> {
        Ok(self.as_str().to_string())
    }
}

// ========================
// Raw Access
// ========================

fn local_storage() -> Result<web_sys::Storage, String> {
    let win = web_sys::window().ok_or("no window")?;
    win.local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn read_raw(key: &str) -> Result<Option<String>, String> {
    local_storage()?.get_item(key).map_err(|e| format!("{:?}", e))
}

pub fn write_raw(key: &str, value: &str) -> Result<(), String> {
    local_storage()?.set_item(key, value).map_err(|e| format!("{:?}", e))
}

// ========================
// Typed Access
// ========================

pub fn load<T: Persisted>() -> T {
    let raw = read_raw(T::KEY).unwrap_or_else(|e| {
        log::warn!("reading {} failed: {}", T::KEY, e);
        None
    });
    T::decode(raw.as_deref())
}

/// True when a value exists under the record's key
pub fn is_stored<T: Persisted>() -> bool {
    matches!(read_raw(T::KEY), Ok(Some(_)))
}

pub fn save<T: Persisted>(value: &T) -> Result<(), String> {
    let encoded = value.encode().map_err(|e| e.to_string())?;
    write_raw(T::KEY, &encoded)
}

/// Save and log instead of returning the failure
pub fn persist<T: Persisted>(value: &T) {
    if let Err(e) = save(value) {
        log::error!("saving {} failed: {}", T::KEY, e);
    }
}
