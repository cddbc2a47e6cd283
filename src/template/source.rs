use std::path::{Path, PathBuf};
use url::Url;

use crate::constants::git::{METADATA_DIR, REPOSITORY_SUFFIX};
use crate::error::{Error, Result};

/// Where a template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl TemplateSource {
    /// Classifies a reference without touching the filesystem.
    pub fn classify(reference: &str) -> Self {
        if is_git_url(reference) {
            TemplateSource::Git(reference.to_string())
        } else {
            TemplateSource::FileSystem(PathBuf::from(reference))
        }
    }

    /// Whether the reference is an existing local directory.
    pub fn is_local_dir(&self) -> bool {
        matches!(self, TemplateSource::FileSystem(path) if path.is_dir())
    }

    /// Whether `git` can clone the reference: a remote URL or a local working copy.
    pub fn is_repository(&self) -> bool {
        match self {
            TemplateSource::Git(_) => true,
            TemplateSource::FileSystem(path) => path.join(METADATA_DIR).exists(),
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

/// Determines if a string represents a git repository URL.
///
/// Supports:
/// - HTTP(S) URLs: https://github.com/user/repo
/// - Git URLs: git://github.com/user/repo
/// - SSH URLs: git@github.com:user/repo
/// - SSH URLs with explicit protocol: ssh://git@github.com/user/repo
pub fn is_git_url(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        return matches!(url.scheme(), "http" | "https" | "git" | "ssh")
            && url.host_str().is_some_and(|host| !host.is_empty());
    }
    scp_like_path(s).is_some()
}

/// Path part of an scp-like address (`user@host:owner/repo`), if `s` is one.
fn scp_like_path(s: &str) -> Option<&str> {
    if s.contains("://") {
        return None;
    }
    let at_pos = s.find('@')?;
    let colon_pos = s.rfind(':')?;
    if colon_pos <= at_pos {
        return None;
    }

    let user_part = &s[..at_pos];
    let host_part = &s[at_pos + 1..colon_pos];
    let path_part = &s[colon_pos + 1..];

    let looks_like_host = host_part.contains('.')
        || matches!(host_part, "github.com" | "gitlab.com" | "bitbucket.org");

    (!user_part.is_empty()
        && !host_part.is_empty()
        && looks_like_host
        && path_part.contains('/'))
    .then_some(path_part)
}

/// Derives the short name of a template reference.
///
/// For repository URLs this is the last path segment without the `.git`
/// suffix and with every remaining `.` removed, so
/// `https://github.com/user/repo.name.git` becomes `reponame`. The dot removal
/// is kept for compatibility with existing hub files.
///
/// For local references the path must be an existing directory and the name
/// is its final component.
pub fn extract_template_name(reference: &str) -> Result<String> {
    let invalid = || Error::InvalidTemplateReference { reference: reference.to_string() };

    if is_git_url(reference) {
        let path = match Url::parse(reference) {
            Ok(url) => url.path().to_string(),
            Err(_) => scp_like_path(reference).ok_or_else(invalid)?.to_string(),
        };
        let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        let name = segment.strip_suffix(REPOSITORY_SUFFIX).unwrap_or(segment).replace('.', "");
        if name.is_empty() {
            return Err(invalid());
        }
        return Ok(name);
    }

    let path = Path::new(reference);
    if !path.is_dir() {
        return Err(invalid());
    }

    match path.file_name() {
        Some(name) => Ok(name.to_string_lossy().to_string()),
        None => path
            .canonicalize()?
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(invalid),
    }
}
