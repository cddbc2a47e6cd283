//! Process-wide settings for tigr81.
//!
//! Settings are built once in `main` and handed to the components that need
//! them. An optional `config.yaml` inside the tigr81 home directory overrides
//! the defaults field by field.

use crate::constants::{
    DEFAULT_BRANCH, DEFAULT_HOME_DIRNAME, DEFAULT_ORGANIZATION_LOCATION,
    DEFAULT_PACKAGE_URL, DEFAULT_REPO_LOCATION, HOME_ENV_VAR, SETTINGS_FILENAME,
    USER_HUBS_DIRNAME,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Overrides read from `config.yaml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    user_hub_dir: Option<PathBuf>,
    extra_hub_dirs: Vec<PathBuf>,
    organization_location: Option<String>,
    default_branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root of tigr81's own files.
    pub home: PathBuf,
    /// Directory where `hub add` writes and `hub remove` deletes.
    pub user_hub_dir: PathBuf,
    /// Additional read-only registry directories, loaded before the user directory.
    pub extra_hub_dirs: Vec<PathBuf>,
    /// Base URL under which the bundled project templates live.
    pub organization_location: String,
    pub default_branch: String,
    pub repo_location: String,
    pub package_url: String,
}

impl Settings {
    /// Defaults rooted at `home`, without reading any file.
    pub fn with_home<P: AsRef<Path>>(home: P) -> Self {
        let home = home.as_ref().to_path_buf();
        Self {
            user_hub_dir: home.join(USER_HUBS_DIRNAME),
            home,
            extra_hub_dirs: Vec::new(),
            organization_location: DEFAULT_ORGANIZATION_LOCATION.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            repo_location: DEFAULT_REPO_LOCATION.to_string(),
            package_url: DEFAULT_PACKAGE_URL.to_string(),
        }
    }

    /// Resolves the home directory and applies `config.yaml` if present.
    pub fn load() -> Result<Self> {
        let home = match std::env::var_os(HOME_ENV_VAR) {
            Some(home) => PathBuf::from(home),
            None => dirs::home_dir()
                .ok_or_else(|| {
                    Error::Other(anyhow::anyhow!("Could not determine home directory"))
                })?
                .join(DEFAULT_HOME_DIRNAME),
        };
        Self::load_from(home)
    }

    pub fn load_from<P: AsRef<Path>>(home: P) -> Result<Self> {
        let mut settings = Self::with_home(home);
        let settings_path = settings.home.join(SETTINGS_FILENAME);

        if settings_path.is_file() {
            log::debug!("Reading settings from '{}'", settings_path.display());
            let content = std::fs::read_to_string(&settings_path)?;
            let overrides: SettingsFile = if content.trim().is_empty() {
                SettingsFile::default()
            } else {
                serde_yaml::from_str(&content)?
            };
            settings.apply(overrides);
        }

        Ok(settings)
    }

    fn apply(&mut self, overrides: SettingsFile) {
        if let Some(dir) = overrides.user_hub_dir {
            self.user_hub_dir = dir;
        }
        self.extra_hub_dirs = overrides.extra_hub_dirs;
        if let Some(location) = overrides.organization_location {
            self.organization_location = location;
        }
        if let Some(branch) = overrides.default_branch {
            self.default_branch = branch;
        }
    }

    /// Registry directories in load order; the user directory comes last so its hubs win.
    pub fn hub_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = self.extra_hub_dirs.clone();
        dirs.push(self.user_hub_dir.clone());
        dirs
    }
}
