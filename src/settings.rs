//! Interface preferences shared by every client of the server.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings lock poisoned")]
    Poisoned,
}

/// How list pages lay out their records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub view_mode: ViewMode,
}

/// Persistence backend for [`UiSettings`].
pub trait SettingsStore: Send + Sync {
    /// `None` when nothing was saved yet.
    fn load(&self) -> SettingsResult<Option<UiSettings>>;
    fn save(&self, settings: &UiSettings) -> SettingsResult<()>;
}

impl SettingsStore for Box<dyn SettingsStore> {
    fn load(&self) -> SettingsResult<Option<UiSettings>> {
        (**self).load()
    }

    fn save(&self, settings: &UiSettings) -> SettingsResult<()> {
        (**self).save(settings)
    }
}

/// Preferences shared by the HTTP workers, whatever the backing store.
pub type SharedPreferences = Preferences<Box<dyn SettingsStore>>;

/// Stores settings as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> SettingsResult<Option<UiSettings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, settings: &UiSettings) -> SettingsResult<()> {
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Keeps settings in memory only.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    saved: Mutex<Option<UiSettings>>,
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> SettingsResult<Option<UiSettings>> {
        let saved = self.saved.lock().map_err(|_| SettingsError::Poisoned)?;
        Ok(*saved)
    }

    fn save(&self, settings: &UiSettings) -> SettingsResult<()> {
        let mut saved = self.saved.lock().map_err(|_| SettingsError::Poisoned)?;
        *saved = Some(*settings);
        Ok(())
    }
}

/// Current preferences with write-through to a [`SettingsStore`].
pub struct Preferences<S: SettingsStore> {
    store: S,
    current: RwLock<UiSettings>,
}

impl<S: SettingsStore> Preferences<S> {
    /// Read the persisted settings, falling back to the defaults.
    pub fn init(store: S) -> SettingsResult<Self> {
        let current = store.load()?.unwrap_or_default();
        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    pub fn view_mode(&self) -> SettingsResult<ViewMode> {
        let current = self.current.read().map_err(|_| SettingsError::Poisoned)?;
        Ok(current.view_mode)
    }

    /// Persist first, then update the in-memory value.
    pub fn set_view_mode(&self, view_mode: ViewMode) -> SettingsResult<ViewMode> {
        let mut current = self.current.write().map_err(|_| SettingsError::Poisoned)?;
        let updated = UiSettings { view_mode };
        self.store.save(&updated)?;
        *current = updated;
        Ok(view_mode)
    }
}
