use crate::constants::git::EXECUTABLE;
use crate::error::Result;
use crate::process::{CommandRunner, CommandSpec};

/// Author identity taken from the user's git configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
}

impl AuthorInfo {
    /// Builds the identity from an email; the name is the part before `@`.
    pub fn from_email(email: &str) -> Self {
        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email);
        Self { name: name.to_string(), email: email.to_string() }
    }
}

/// Reads `user.email` from git config.
///
/// Returns `None` when git is unavailable or the key is unset.
pub fn author_info(runner: &dyn CommandRunner) -> Result<Option<AuthorInfo>> {
    let spec = CommandSpec::new(EXECUTABLE).args(["config", "user.email"]);
    let output = match runner.execute(&spec) {
        Ok(output) => output,
        Err(e) => {
            log::warn!("Could not read git author: {e}");
            return Ok(None);
        }
    };

    let email = output.stdout.trim();
    if !output.status.success() || email.is_empty() {
        log::debug!("git config user.email is not set");
        return Ok(None);
    }
    Ok(Some(AuthorInfo::from_email(email)))
}
