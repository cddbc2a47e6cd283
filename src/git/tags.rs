use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::constants::git::{DEREFERENCE_SUFFIX, EXECUTABLE, NO_TAGS, TAG_NAMESPACE};
use crate::error::{Error, Result};
use crate::process::{CommandRunner, CommandSpec};

/// A version tag such as `1.2.3`, ordered by its integer components.
#[derive(Debug, Clone, Eq)]
pub struct Tag {
    raw: String,
    components: Vec<u64>,
}

impl Tag {
    /// The "no tags found" tag.
    pub fn none() -> Self {
        Self { raw: NO_TAGS.to_string(), components: vec![0, 0, 0] }
    }

    pub fn is_none(&self) -> bool {
        self.raw == NO_TAGS
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let components = s
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidTag { tag: s.to_string() })?;
        Ok(Self { raw: s.to_string(), components })
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components
            .cmp(&other.components)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Extracts candidate tag names from `git ls-remote --tags` output.
///
/// Lines look like `<object-id>\t<ref-name>`; peeled `^{}` entries are skipped.
pub fn tag_names(ls_remote_output: &str) -> Vec<&str> {
    ls_remote_output
        .lines()
        .map(str::trim_end)
        .filter(|line| line.contains(TAG_NAMESPACE) && !line.ends_with(DEREFERENCE_SUFFIX))
        .filter_map(|line| line.rsplit(TAG_NAMESPACE).next())
        .collect()
}

/// Returns the highest tag in the listing, or [`Tag::none`] if there is none.
///
/// A tag with a non-numeric component fails the whole resolution.
pub fn highest_tag(ls_remote_output: &str) -> Result<Tag> {
    let mut tags = tag_names(ls_remote_output)
        .into_iter()
        .map(str::parse::<Tag>)
        .collect::<Result<Vec<_>>>()?;
    tags.sort();
    Ok(tags.pop().unwrap_or_else(Tag::none))
}

/// Queries the remote's tags and returns the highest one.
///
/// When the remote cannot be queried the failure is reported and [`Tag::none`]
/// is returned so the caller can fall back to a default branch.
pub fn latest_tag(runner: &dyn CommandRunner, repository: &str) -> Result<Tag> {
    let spec = CommandSpec::new(EXECUTABLE).args(["ls-remote", "--tags", repository]);

    let output = match runner.run(&spec) {
        Ok(output) => output,
        Err(Error::CommandFailed { stderr, .. }) => {
            eprintln!("Error fetching tags: {stderr}");
            return Ok(Tag::none());
        }
        Err(Error::IoError(e)) => {
            eprintln!("Error fetching tags: {e}");
            return Ok(Tag::none());
        }
        Err(e) => return Err(e),
    };

    let latest = highest_tag(&output.stdout)?;
    log::info!("Latest tag of '{repository}': {latest}");
    Ok(latest)
}
