//! Extension traits for built-in Rust types.
//!
//! Each extension trait lives in a file named after the type it extends:
//! - `path.rs` - Extensions for `std::path::Path`
//! - `list.rs` - Extensions for slices of displayable items
pub mod list;
pub mod path;

pub use list::PrettyList;
pub use path::PathExt;
