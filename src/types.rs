//! Common types used across the tigr81 crate.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Project types bundled with tigr81.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ProjectType {
    /// FastAPI service.
    #[value(name = "fastapi")]
    FastApi,
    /// Poetry package.
    #[value(name = "poetry_pkg")]
    PoetryPkg,
    /// PrimeReact application.
    #[value(name = "prime-react")]
    PrimeReact,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] =
        [ProjectType::FastApi, ProjectType::PoetryPkg, ProjectType::PrimeReact];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::FastApi => "fastapi",
            ProjectType::PoetryPkg => "poetry_pkg",
            ProjectType::PrimeReact => "prime-react",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProjectType::FastApi => "🌐",
            ProjectType::PoetryPkg => "📦",
            ProjectType::PrimeReact => "⚛️ ",
        }
    }

    /// Repository location of the project template under an organization.
    pub fn project_location(&self, organization_location: &str) -> String {
        format!("{}/{}", organization_location.trim_end_matches('/'), self)
    }

    /// Whether the template receives the project options as extra context.
    pub fn takes_project_options(&self) -> bool {
        !matches!(self, ProjectType::PrimeReact)
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine used to materialize a hub template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Cookiecutter,
    Copier,
    /// Plain repository or directory copy without substitution.
    RawGit,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] =
        [TemplateKind::Cookiecutter, TemplateKind::Copier, TemplateKind::RawGit];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Cookiecutter => "cookiecutter",
            TemplateKind::Copier => "copier",
            TemplateKind::RawGit => "raw_git",
        }
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
