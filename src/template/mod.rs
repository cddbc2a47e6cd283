//! Template references and the engines that render them.

pub mod engine;
pub mod source;

pub use engine::{engine_for, EngineInvocation, TemplateEngine};
pub use source::{extract_template_name, is_git_url, TemplateSource};
