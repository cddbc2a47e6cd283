//! Hubs: named collections of templates stored as YAML files.

pub mod models;
pub mod prompt;
pub mod registry;

pub use models::{Hub, HubTemplate};
pub use registry::{get_template_from_hubs, is_hub_name_available, load_hubs, HubRegistry, Hubs};
