//! Theme preference with persistence
//!
//! The preference is a single boolean (`dark_mode`). It is read once at
//! startup and written back on every change.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use cloudcmp_core::prelude::*;
use cloudcmp_core::ThemeMode;

const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Backing storage for the dark-mode flag
pub trait ThemeStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<bool>>;

    fn save(&self, dark_mode: bool) -> Result<()>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn load(&self) -> Result<Option<bool>> {
        (**self).load()
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        (**self).save(dark_mode)
    }
}

/// Current theme plus the store it persists to
#[derive(Debug)]
pub struct ThemePreference<S: ThemeStore> {
    mode: ThemeMode,
    store: S,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Read the stored value once. Missing or malformed values mean light.
    pub fn load(store: S) -> Self {
        let mode = match store.load() {
            Ok(Some(dark)) => ThemeMode::from_dark(dark),
            Ok(None) => {
                debug!("No stored theme preference, using light");
                ThemeMode::Light
            }
            Err(e) => {
                warn!("Ignoring unreadable theme preference: {}", e);
                ThemeMode::Light
            }
        };
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it.
    ///
    /// The in-memory mode changes even if persisting fails.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.mode = mode;
        self.store.save(mode.is_dark())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    dark_mode: Option<bool>,
}

/// `dark_mode = true|false` in a small TOML file
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/cloudcmp/preferences.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cloudcmp").join(PREFERENCES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<bool>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let prefs: Preferences = toml::from_str(&content)?;
        Ok(prefs.dark_mode)
    }

    /// Atomic write: temp file in the same directory, then rename
    fn save(&self, dark_mode: bool) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::config("preferences path has no parent directory"))?;
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;

        let content = toml::to_string(&Preferences {
            dark_mode: Some(dark_mode),
        })
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

        let temp_path = dir.join(".preferences.toml.tmp");
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved theme preference dark_mode={} to {:?}", dark_mode, self.path);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory store
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory store, also counts writes
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<bool>>,
    saves: AtomicUsize,
}

impl MemoryThemeStore {
    pub fn with_value(value: Option<bool>) -> Self {
        Self {
            value: Mutex::new(value),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn stored(&self) -> Option<bool> {
        *self.value.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<bool>> {
        Ok(self.stored())
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(dark_mode);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
