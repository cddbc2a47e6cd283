//! Constants used throughout tigr81

/// Extension of hub files inside a registry directory.
pub const HUB_FILE_EXTENSION: &str = "yml";

/// Name of the optional settings file inside the tigr81 home directory.
pub const SETTINGS_FILENAME: &str = "config.yaml";

/// Environment variable overriding the tigr81 home directory.
pub const HOME_ENV_VAR: &str = "TIGR81_HOME";

/// Home directory name under the user's home when no override is given.
pub const DEFAULT_HOME_DIRNAME: &str = ".tigr81";

/// Directory holding user hubs inside the home directory.
pub const USER_HUBS_DIRNAME: &str = "hubs";

/// Name of the hub built from the bundled project types.
pub const BUILTIN_HUB_NAME: &str = "tigr81";

/// Branch used when no checkout reference is given or resolved.
pub const DEFAULT_BRANCH: &str = "main";

/// Default hub name offered by `hub add`.
pub const DEFAULT_HUB_NAME: &str = "my-hub";

pub const DEFAULT_ORGANIZATION_LOCATION: &str = "https://github.com/tigr81";
pub const DEFAULT_REPO_LOCATION: &str = "https://github.com/tigr81/tigr81";
pub const DEFAULT_PACKAGE_URL: &str = "https://crates.io/crates/tigr81";

/// Output directory used for local scaffolding when the output is the current dir.
pub const LOCAL_SCAFFOLD_DIR: &str = "scaffolded";

/// Marker for "the current directory" in output and subdirectory arguments.
pub const CURRENT_DIR: &str = ".";

pub mod git {
    /// External executable used for every version-control operation.
    pub const EXECUTABLE: &str = "git";
    /// Reference-name prefix of version tags.
    pub const TAG_NAMESPACE: &str = "refs/tags/";
    /// Suffix of peeled annotated-tag entries in `ls-remote` output.
    pub const DEREFERENCE_SUFFIX: &str = "^{}";
    /// Suffix stripped from repository names.
    pub const REPOSITORY_SUFFIX: &str = ".git";
    pub const METADATA_DIR: &str = ".git";
    /// Sparse-checkout control file, relative to the metadata directory.
    pub const SPARSE_CHECKOUT_FILE: &str = "info/sparse-checkout";
    /// Returned when a remote has no usable tags.
    pub const NO_TAGS: &str = "0.0.0";
}

pub mod engines {
    pub const COOKIECUTTER: &str = "cookiecutter";
    pub const COPIER: &str = "copier";
}

/// Author defaults passed to the bundled project templates.
pub mod project {
    pub const AUTHOR_NAME: &str = "name surname";
    pub const AUTHOR_EMAIL: &str = "email@gmail.com";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
