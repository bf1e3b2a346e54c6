//! Configuration loading and validation for ledge.
//!
//! Values are layered, later layers winning: built-in defaults, then an
//! optional TOML file in the platform config directory, then `LEDGE_*`
//! environment variables. Everything here is a plain value — the
//! modifier-key binding and other UI concerns belong to the UI collaborator.

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix: `LEDGE_GRACE_DELAY_SECS` and friends.
const ENV_PREFIX: &str = "LEDGE_";

/// Tunables for the verified-move pipeline.
///
/// Durations are plain seconds so they can live in a TOML file; the typed
/// accessors convert. Defaults match the behaviour users saw before any of
/// this was configurable: a one-second grace delay and a ten-second search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Wait between drag end and the start of verification, giving the
    /// receiving application time to finish its copy. Zero disables the wait.
    pub grace_delay_secs: f64,
    /// Hard deadline for one copy search; expiry means "nothing found".
    pub locate_timeout_secs: f64,
    /// Pause between sweeps while the search has only seen the source.
    pub locate_poll_interval_secs: f64,
    /// Directories the copy locator sweeps. Must be absolute.
    pub search_roots: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grace_delay_secs: 1.0,
            locate_timeout_secs: 10.0,
            locate_poll_interval_secs: 0.5,
            search_roots: directories::UserDirs::new()
                .map(|dirs| vec![dirs.home_dir().to_path_buf()])
                .unwrap_or_default(),
        }
    }
}

impl Settings {
    /// Load from the default config file location plus the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file().as_deref())
    }

    /// Load with an explicit file path (or none), plus the environment.
    ///
    /// A missing file is fine — the layer just contributes nothing.
    ///
    /// # Errors
    /// Returns an error when a layer fails to parse or validation rejects
    /// the merged result.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        let settings: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract().or_raise(|| ErrorKind::Load)?;
        settings.validate()?;
        tracing::debug!(?settings, "configuration loaded");
        Ok(settings)
    }

    /// The platform config file location, when one can be determined.
    pub fn config_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ledge").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("grace_delay_secs", self.grace_delay_secs),
            ("locate_timeout_secs", self.locate_timeout_secs),
            ("locate_poll_interval_secs", self.locate_poll_interval_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                exn::bail!(ErrorKind::InvalidDuration { field });
            }
        }
        if let Some(relative) = self.search_roots.iter().find(|root| !root.is_absolute()) {
            exn::bail!(ErrorKind::RelativeRoot(relative.clone()));
        }
        Ok(())
    }

    pub fn grace_delay(&self) -> Duration {
        Duration::from_secs_f64(self.grace_delay_secs)
    }

    pub fn locate_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.locate_timeout_secs)
    }

    pub fn locate_poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.locate_poll_interval_secs)
    }
}
