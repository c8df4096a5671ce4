//! Persisted desktop preferences.
//!
//! A two-key store (`theme`, `wallpaper`) kept as TOML under the XDG config
//! directory. Read once at startup, written back on each toggle. The
//! window manager core never touches this; load/save failures degrade to
//! defaults and a log line, never a crash.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::{Theme, Wallpaper};

const PREFS_FILE: &str = "prefs.toml";

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("could not resolve config directory: {0}")]
    BaseDirs(#[from] xdg::BaseDirectoriesError),
    #[error("could not read preferences: {0}")]
    Io(#[from] io::Error),
    #[error("preferences file is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub wallpaper: Wallpaper,
}

impl Preferences {
    /// Default on-disk location, e.g. `~/.config/term-desk/prefs.toml`.
    pub fn default_path() -> Result<PathBuf, PrefsError> {
        let dirs = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"))?;
        Ok(dirs.get_config_home().join(PREFS_FILE))
    }

    /// Load from `path`. A missing file yields the defaults; a malformed
    /// one is an error so the caller can decide to log and move on.
    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };
        Ok(toml::from_str(&raw)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!(theme = self.theme.as_str(), wallpaper = self.wallpaper.as_str(), "saved preferences");
        Ok(())
    }

    /// Startup load from the default path, falling back to defaults (with a
    /// log line) when anything goes wrong.
    pub fn load_or_default() -> Self {
        match Self::default_path().and_then(|path| Self::load_from(&path)) {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!(%err, "using default preferences");
                Self::default()
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFS_FILE);
        let prefs = Preferences {
            theme: Theme::Light,
            wallpaper: Wallpaper::Ocean,
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(Preferences::load_from(&path).unwrap(), prefs);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "theme = 42").unwrap();
        assert!(matches!(
            Preferences::load_from(&path),
            Err(PrefsError::Parse(_))
        ));
    }

    #[test]
    fn keys_serialize_as_lowercase_names() {
        let prefs = Preferences {
            theme: Theme::Dark,
            wallpaper: Wallpaper::Midnight,
        };
        let raw = toml::to_string(&prefs).unwrap();
        assert!(raw.contains("theme = \"dark\""));
        assert!(raw.contains("wallpaper = \"midnight\""));
    }
}
