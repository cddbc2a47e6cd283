use crate::constants::{verbosity, CURRENT_DIR};
use crate::scaffold::ScaffoldRequest;
use crate::types::ProjectType;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// tigr81 - scaffold projects from bundled templates, repositories and hubs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check out version information.
    Version,

    /// Scaffold a project template.
    Scaffold(ScaffoldArgs),

    /// Handle hub templates.
    Hub {
        #[command(subcommand)]
        command: HubCommands,
    },
}

/// Arguments for the scaffold command.
#[derive(Args, Debug, Clone)]
pub struct ScaffoldArgs {
    /// The project type to scaffold.
    #[arg(value_name = "PROJECT_TYPE", value_enum)]
    pub project_type: Option<ProjectType>,

    /// Accept the template defaults instead of prompting.
    #[arg(long)]
    pub default: bool,

    /// Directory in which the project is scaffolded.
    #[arg(long = "output-dir", default_value = CURRENT_DIR)]
    pub output_dir: PathBuf,

    /// Use the local directory named after the project type as template.
    #[arg(long)]
    pub dev: bool,

    /// Local folder holding the template.
    #[arg(long = "local-dir")]
    pub local_dir: Option<PathBuf>,

    /// Reference for remote scaffolding (default: latest tag).
    #[arg(long)]
    pub checkout: Option<String>,

    /// URL or path of a cookiecutter project template.
    #[arg(long = "cookiecutter-url", visible_alias = "ck-url")]
    pub cookiecutter_url: Option<String>,

    /// URL of a git repository to copy.
    #[arg(long = "git-url")]
    pub git_url: Option<String>,

    /// Relative path of the template inside the repository.
    #[arg(long)]
    pub directory: Option<PathBuf>,
}

impl From<ScaffoldArgs> for ScaffoldRequest {
    fn from(args: ScaffoldArgs) -> Self {
        ScaffoldRequest {
            project_type: args.project_type,
            default: args.default,
            output_dir: args.output_dir,
            dev: args.dev,
            local_dir: args.local_dir,
            checkout: args.checkout,
            cookiecutter_url: args.cookiecutter_url,
            git_url: args.git_url,
            directory: args.directory,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum HubCommands {
    /// Add a new hub.
    Add,

    /// List all hubs, or the templates of one hub.
    #[command(visible_alias = "ls")]
    List {
        /// The name of the hub to list.
        #[arg(value_name = "HUB")]
        name: Option<String>,
    },

    /// Remove a hub from the user hub directory.
    #[command(visible_alias = "rm")]
    Remove {
        /// The name of the hub to delete.
        #[arg(value_name = "HUB")]
        name: String,
    },

    /// Scaffold a template from an existing hub.
    Scaffold {
        /// The hub holding the template.
        #[arg(value_name = "HUB")]
        hub: Option<String>,

        /// The template to scaffold.
        #[arg(value_name = "TEMPLATE")]
        template: Option<String>,

        /// Directory in which the template is scaffolded.
        #[arg(long = "output-dir", default_value = CURRENT_DIR)]
        output_dir: PathBuf,
    },
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_scaffold_defaults() {
        let cli = Cli::parse_from(["tigr81", "scaffold"]);
        let Commands::Scaffold(args) = cli.command else { panic!("expected scaffold") };
        let request = ScaffoldRequest::from(args);
        assert_eq!(request, ScaffoldRequest::default());
    }

    #[test]
    fn parses_scaffold_flags() {
        let cli = Cli::parse_from([
            "tigr81",
            "scaffold",
            "poetry_pkg",
            "--default",
            "--output-dir",
            "out",
            "--checkout",
            "1.0.0",
            "--ck-url",
            "https://github.com/u/tpl.git",
            "--directory",
            "sub",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Scaffold(args) = cli.command else { panic!("expected scaffold") };
        assert_eq!(args.project_type, Some(ProjectType::PoetryPkg));
        assert!(args.default);
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.checkout.as_deref(), Some("1.0.0"));
        assert_eq!(args.cookiecutter_url.as_deref(), Some("https://github.com/u/tpl.git"));
        assert_eq!(args.directory, Some(PathBuf::from("sub")));
    }

    #[test]
    fn rejects_unknown_project_type() {
        assert!(Cli::try_parse_from(["tigr81", "scaffold", "django"]).is_err());
    }

    #[test]
    fn parses_hub_subcommands() {
        let cli = Cli::parse_from(["tigr81", "hub", "list"]);
        assert!(matches!(cli.command, Commands::Hub { command: HubCommands::List { name: None } }));

        let cli = Cli::parse_from(["tigr81", "hub", "remove", "mine"]);
        assert!(matches!(
            cli.command,
            Commands::Hub { command: HubCommands::Remove { ref name } } if name == "mine"
        ));

        let cli = Cli::parse_from(["tigr81", "-v", "hub", "scaffold", "h", "t", "--output-dir", "o"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Hub { command: HubCommands::Scaffold { hub, template, output_dir } } => {
                assert_eq!(hub.as_deref(), Some("h"));
                assert_eq!(template.as_deref(), Some("t"));
                assert_eq!(output_dir, PathBuf::from("o"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn remove_requires_a_name() {
        assert!(Cli::try_parse_from(["tigr81", "hub", "remove"]).is_err());
    }
}
