use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::git::{EXECUTABLE, METADATA_DIR, REPOSITORY_SUFFIX, SPARSE_CHECKOUT_FILE};
use crate::constants::DEFAULT_BRANCH;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::process::{path_arg, CommandRunner, CommandSpec};

/// Directory name derived from a repository location: its final path segment
/// without the `.git` suffix.
pub fn repository_dir_name(repository: &str) -> String {
    let segment = repository
        .trim_end_matches('/')
        .rsplit(|c| c == '/' || c == ':' || c == '\\')
        .next()
        .unwrap_or(repository);
    segment.strip_suffix(REPOSITORY_SUFFIX).unwrap_or(segment).to_string()
}

/// Materializes `subdirectory` of `repository` at `checkout` into `destination`.
///
/// A destination of `.` is replaced by a directory named after the repository.
/// The clone is made without a working tree; for anything other than the
/// repository root a sparse checkout restricted to `subdirectory` is configured
/// before the checkout, and the subdirectory's contents are then moved up to the
/// destination root. The `.git` directory is removed at the end.
///
/// Returns the directory that was populated.
pub fn fetch_subdirectory(
    runner: &dyn CommandRunner,
    repository: &str,
    checkout: Option<&str>,
    subdirectory: &Path,
    destination: &Path,
) -> Result<PathBuf> {
    let checkout = checkout.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_BRANCH);
    let destination = if destination.is_current_dir() {
        PathBuf::from(repository_dir_name(repository))
    } else {
        destination.to_path_buf()
    };
    let dest = path_arg(&destination);

    log::info!("Cloning '{repository}' into '{dest}' without checkout");
    runner.run(&CommandSpec::new(EXECUTABLE).args([
        "clone",
        "--no-checkout",
        repository,
        dest.as_str(),
    ]))?;

    let git_dir = destination.join(METADATA_DIR);
    let sparse = !subdirectory.is_current_dir();

    if sparse {
        let sparse_file = git_dir.join(SPARSE_CHECKOUT_FILE);
        if let Some(parent) = sparse_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sparse_file, format!("{}\n", sparse_pattern(subdirectory)))?;
        log::debug!("Sparse checkout restricted to '{}'", subdirectory.display());

        runner.run(
            &CommandSpec::new(EXECUTABLE)
                .args(["-C", dest.as_str(), "config", "core.sparseCheckout", "true"]),
        )?;
    }

    log::info!("Checking out '{checkout}'");
    runner.run(
        &CommandSpec::new(EXECUTABLE).args(["-C", dest.as_str(), "checkout", checkout]),
    )?;

    if !git_dir.is_dir() {
        return Err(Error::FetchIntegrity { path: git_dir });
    }
    fs::remove_dir_all(&git_dir)?;
    log::debug!("Removed '{}'", git_dir.display());

    if sparse {
        hoist_subdirectory(&destination, subdirectory).map_err(|e| match e {
            Error::TemplateDoesNotExistsError { .. } => Error::SubdirectoryNotFound {
                repository: repository.to_string(),
                subdirectory: subdirectory.display().to_string(),
                checkout: checkout.to_string(),
            },
            other => other,
        })?;
    }

    Ok(destination)
}

/// Sparse-checkout patterns always use forward slashes.
fn sparse_pattern(subdirectory: &Path) -> String {
    subdirectory
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Replaces the contents of `root` with the contents of `root/subdirectory`.
fn hoist_subdirectory(root: &Path, subdirectory: &Path) -> Result<()> {
    let source = root.join(subdirectory);
    if !source.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: source.display().to_string(),
        });
    }

    let staging = tempfile::Builder::new().prefix(".tigr81-").tempdir_in(root)?;
    let staged = staging.path().join("tree");
    fs::rename(&source, &staged)?;

    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path == staging.path() {
            continue;
        }
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    for entry in fs::read_dir(&staged)? {
        let entry = entry?;
        fs::rename(entry.path(), root.join(entry.file_name()))?;
    }

    staging.close()?;
    Ok(())
}
