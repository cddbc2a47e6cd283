use indexmap::IndexMap;

use crate::constants::project::{AUTHOR_EMAIL, AUTHOR_NAME};
use crate::git::AuthorInfo;

/// Values handed to a bundled project template as extra context.
///
/// Unset options are left out so the template's own defaults apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub name: Option<String>,
    pub package_name: Option<String>,
    pub description: Option<String>,
    pub author_name: String,
    pub author_email: String,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            name: None,
            package_name: None,
            description: None,
            author_name: AUTHOR_NAME.to_string(),
            author_email: AUTHOR_EMAIL.to_string(),
        }
    }
}

impl ProjectOptions {
    /// Defaults with the author taken from git when known.
    pub fn with_author(author: Option<AuthorInfo>) -> Self {
        match author {
            Some(AuthorInfo { name, email }) => {
                Self { author_name: name, author_email: email, ..Self::default() }
            }
            None => Self::default(),
        }
    }

    pub fn extra_context(&self) -> IndexMap<String, String> {
        let mut context = IndexMap::new();
        let optional = [
            ("name", &self.name),
            ("package_name", &self.package_name),
            ("description", &self.description),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                context.insert(key.to_string(), value.clone());
            }
        }
        context.insert("author_name".to_string(), self.author_name.clone());
        context.insert("author_email".to_string(), self.author_email.clone());
        context
    }
}
