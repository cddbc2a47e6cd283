//! Hub registry over one or more directories of hub files.

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::constants::HUB_FILE_EXTENSION;
use crate::error::{Error, Result};
use crate::hub::models::{Hub, HubTemplate};

/// Hubs keyed by name, in load order.
pub type Hubs = IndexMap<String, Hub>;

/// Loads every `*.yml` hub file from `dirs`.
///
/// Directories are read in order and files alphabetically; when two files
/// declare the same hub name the last one loaded wins. Missing directories
/// are ignored and unreadable hub files are skipped with a warning.
pub fn load_hubs<P: AsRef<Path>>(dirs: &[P]) -> Result<Hubs> {
    let mut hubs = Hubs::new();
    for dir in dirs {
        for path in hub_files(dir.as_ref())? {
            match Hub::from_yaml(&path) {
                Ok(hub) => {
                    log::debug!("Loaded hub '{}' from '{}'", hub.name, path.display());
                    if let Some(previous) = hubs.insert(hub.name.clone(), hub) {
                        log::debug!("Hub '{}' overridden by '{}'", previous.name, path.display());
                    }
                }
                Err(e) => log::warn!("Skipping hub file '{}': {e}", path.display()),
            }
        }
    }
    Ok(hubs)
}

fn hub_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        log::debug!("Hub directory '{}' does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == HUB_FILE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether no loaded hub uses `name`.
pub fn is_hub_name_available(name: &str, hubs: &Hubs) -> bool {
    !hubs.contains_key(name)
}

pub fn get_template_from_hubs<'a>(
    hubs: &'a Hubs,
    hub_name: &str,
    template_name: &str,
) -> Result<&'a HubTemplate> {
    let hub = hubs
        .get(hub_name)
        .ok_or_else(|| Error::HubNotFound { hub: hub_name.to_string() })?;
    hub.template(template_name).ok_or_else(|| Error::HubTemplateNotFound {
        hub: hub_name.to_string(),
        template: template_name.to_string(),
    })
}

/// Hub files known to tigr81: the built-in hub, the configured extra
/// directories and the user directory, in that order.
pub struct HubRegistry {
    builtin: Option<Hub>,
    dirs: Vec<PathBuf>,
    user_dir: PathBuf,
}

impl HubRegistry {
    pub fn new(settings: &Settings) -> Self {
        Self {
            builtin: Some(Hub::builtin(settings)),
            dirs: settings.hub_dirs(),
            user_dir: settings.user_hub_dir.clone(),
        }
    }

    /// Every visible hub.
    pub fn load(&self) -> Result<Hubs> {
        let mut hubs = Hubs::new();
        if let Some(builtin) = &self.builtin {
            hubs.insert(builtin.name.clone(), builtin.clone());
        }
        hubs.extend(load_hubs(&self.dirs)?);
        Ok(hubs)
    }

    /// Hubs stored in the user directory only.
    pub fn user_hubs(&self) -> Result<Hubs> {
        load_hubs(&[&self.user_dir])
    }

    /// Saves a new hub in the user directory. Names already visible are refused.
    pub fn add(&self, hub: &Hub) -> Result<PathBuf> {
        Hub::validate_name(&hub.name)?;
        if !is_hub_name_available(&hub.name, &self.load()?) {
            return Err(Error::HubAlreadyExists { hub: hub.name.clone() });
        }
        hub.to_yaml(&self.user_dir)
    }

    /// Deletes a hub from the user directory and returns the removed file.
    pub fn remove(&self, name: &str) -> Result<PathBuf> {
        Hub::validate_name(name)?;
        if !self.user_hubs()?.contains_key(name) {
            return Err(Error::HubNotFound { hub: name.to_string() });
        }
        let path = self.user_dir.join(Hub::file_name(name));
        if !path.is_file() {
            return Err(Error::Other(anyhow::anyhow!(
                "Hub '{name}' is not stored in '{}'",
                path.display()
            )));
        }
        fs::remove_file(&path)?;
        log::debug!("Removed hub file '{}'", path.display());
        Ok(path)
    }
}

#[cfg(test)]
impl HubRegistry {
    /// A registry over a single directory without the built-in hub.
    pub(crate) fn with_dir(user_dir: PathBuf) -> Self {
        Self { builtin: None, dirs: vec![user_dir.clone()], user_dir }
    }
}
