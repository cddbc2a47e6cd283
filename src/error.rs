use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse hub file '{path}'. Original error: {e}")]
    HubParseError { path: PathBuf, e: serde_yaml::Error },

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// The reference is neither an existing local directory nor a supported remote URL.
    #[error("Invalid template reference: '{reference}'. Expected an existing directory or a git repository URL.")]
    InvalidTemplateReference { reference: String },

    /// A tag under `refs/tags/` has a non-numeric component.
    #[error("Invalid version tag '{tag}': every dot-separated component must be a non-negative integer.")]
    InvalidTag { tag: String },

    #[error("Hub '{hub}' not found.")]
    HubNotFound { hub: String },

    #[error("Template '{template}' not found in hub '{hub}'.")]
    HubTemplateNotFound { hub: String, template: String },

    #[error("The hub name '{hub}' is not valid. A hub with this name is already present.")]
    HubAlreadyExists { hub: String },

    /// Hub names become file names inside the hub directory.
    #[error("Invalid hub name '{hub}': it must be non-empty and cannot contain path separators or '..'.")]
    InvalidHubName { hub: String },

    #[error("Cannot proceed: no entries to choose from for '{what}'.")]
    NothingToSelect { what: String },

    /// An external command exited with a non-zero status.
    #[error("Command `{program} {args}` failed with {status}: {stderr}")]
    CommandFailed { program: String, args: String, status: ExitStatus, stderr: String },

    /// The version-control metadata directory was missing after checkout.
    #[error("Fetch left no version-control metadata at '{path}'; the checkout sequence did not complete.")]
    FetchIntegrity { path: PathBuf },

    #[error("Subdirectory '{subdirectory}' does not exist in '{repository}' at '{checkout}'.")]
    SubdirectoryNotFound { repository: String, subdirectory: String, checkout: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
