use std::path::{Component, Path};

/// Extension trait for Path.
pub trait PathExt {
    /// Whether the path denotes the working directory itself (`""`, `.`, `./.`).
    fn is_current_dir(&self) -> bool;
}

impl PathExt for Path {
    fn is_current_dir(&self) -> bool {
        self.components().all(|c| matches!(c, Component::CurDir))
    }
}
