//! Wrappers around the external `git` executable.
//!
//! - `tags`: latest semantic-version tag of a remote
//! - `fetch`: sparse fetch of a repository subdirectory without `.git`
//! - `author`: author identity from git config

pub mod author;
pub mod fetch;
pub mod tags;

pub use author::{author_info, AuthorInfo};
pub use fetch::{fetch_subdirectory, repository_dir_name};
pub use tags::{latest_tag, Tag};
