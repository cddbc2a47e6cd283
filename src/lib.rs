/// Handles argument parsing and command dispatch.
pub mod cli;

/// Process-wide settings.
pub mod config;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard types.
pub mod ext;

/// Tag resolution, sparse fetch and author lookup on top of the `git` executable.
pub mod git;

/// Template hubs stored as YAML files.
pub mod hub;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Running external programs.
pub mod process;

/// User input and interaction handling.
pub mod prompt;

/// Scaffold orchestration.
pub mod scaffold;

/// Template references and engine adapters.
pub mod template;

/// Common types.
pub mod types;
