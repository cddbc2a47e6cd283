use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::constants::{BUILTIN_HUB_NAME, HUB_FILE_EXTENSION};
use crate::error::{Error, Result};
use crate::ioutils::write_file;
use crate::types::{ProjectType, TemplateKind};

/// A template registered in a hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubTemplate {
    pub name: String,
    /// Repository URL or local directory.
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout: Option<String>,
    /// Path of the template inside the repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub template_type: TemplateKind,
}

impl Display for HubTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\tTemplate type: {}", self.template_type)?;
        writeln!(f, "\tTemplate name: {}", self.name)?;
        writeln!(f, "\tTemplate location: {}", self.template)?;
        if let Some(checkout) = &self.checkout {
            writeln!(f, "\tCheckout: {checkout}")?;
        }
        if let Some(directory) = &self.directory {
            writeln!(f, "\tDirectory: {directory}")?;
        }
        Ok(())
    }
}

/// A named collection of templates, persisted as `<name>.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    pub name: String,
    #[serde(default)]
    pub hub_templates: IndexMap<String, HubTemplate>,
}

impl Hub {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), hub_templates: IndexMap::new() }
    }

    /// Adds a template keyed by its name, replacing any previous one.
    pub fn insert(&mut self, template: HubTemplate) {
        self.hub_templates.insert(template.name.clone(), template);
    }

    pub fn template(&self, name: &str) -> Option<&HubTemplate> {
        self.hub_templates.get(name)
    }

    /// Rejects names that would not map to a single file in the hub directory.
    pub fn validate_name(name: &str) -> Result<()> {
        let invalid = name.trim().is_empty()
            || name.contains(['/', '\\'])
            || name.contains("..");
        if invalid {
            return Err(Error::InvalidHubName { hub: name.to_string() });
        }
        Ok(())
    }

    pub fn file_name(name: &str) -> String {
        format!("{name}.{HUB_FILE_EXTENSION}")
    }

    /// Writes the hub to `<dir>/<name>.yml` and returns the written path.
    pub fn to_yaml<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        Self::validate_name(&self.name)?;
        let path = dir.as_ref().join(Self::file_name(&self.name));
        let content = serde_yaml::to_string(self)?;
        write_file(&content, &path)?;
        log::debug!("Hub '{}' written to '{}'", self.name, path.display());
        Ok(path)
    }

    /// Reads a hub file. Empty or malformed files are rejected.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::HubParseError { path: path.to_path_buf(), e })
    }

    /// The hub of the project types bundled with tigr81.
    pub fn builtin(settings: &Settings) -> Self {
        let mut hub = Hub::new(BUILTIN_HUB_NAME);
        for project_type in ProjectType::ALL {
            hub.insert(HubTemplate {
                name: project_type.to_string(),
                template: project_type.project_location(&settings.organization_location),
                checkout: Some(settings.default_branch.clone()),
                directory: Some(project_type.to_string()),
                template_type: TemplateKind::Cookiecutter,
            });
        }
        hub
    }
}

impl Display for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hub info")?;
        writeln!(f, "hub name: {}", self.name)?;
        writeln!(f, "hub templates:")?;
        writeln!(f)?;
        for template in self.hub_templates.values() {
            write!(f, "{template}")?;
        }
        Ok(())
    }
}
