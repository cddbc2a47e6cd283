use std::path::Path;

use walkdir::WalkDir;

use crate::constants::git::METADATA_DIR;
use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Copies the tree under `source` into `dest`, leaving out any `.git` directory.
///
/// `dest` is created when missing; existing files in it are overwritten.
pub fn copy_dir<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    if !source.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: source.display().to_string(),
        });
    }

    let walker = WalkDir::new(source)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != METADATA_DIR);

    for entry in walker {
        let entry = entry.map_err(|e| Error::Other(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::Other(e.into()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }
    log::debug!("Copied '{}' to '{}'", source.display(), dest.display());
    Ok(())
}
