//! Scaffold orchestration: picks the template source, resolves the checkout
//! reference and hands the work to a template engine.

pub mod project;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::constants::{CURRENT_DIR, LOCAL_SCAFFOLD_DIR};
use crate::error::Result;
use crate::ext::PathExt;
use crate::git::{author_info, latest_tag};
use crate::hub::HubTemplate;
use crate::process::{path_arg, CommandRunner};
use crate::prompt::{select, PromptProvider};
use crate::template::engine::{CookiecutterEngine, RawGitEngine};
use crate::template::{engine_for, EngineInvocation, TemplateEngine, TemplateSource};
use crate::types::ProjectType;

pub use project::ProjectOptions;

pub const PROJECT_TYPE_PROMPT: &str = "Select the project type to scaffold";

/// What the user asked `scaffold` to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_type: Option<ProjectType>,
    /// Accept template defaults instead of prompting.
    pub default: bool,
    pub output_dir: PathBuf,
    /// Use the project type name as a local template directory.
    pub dev: bool,
    pub local_dir: Option<PathBuf>,
    pub checkout: Option<String>,
    pub cookiecutter_url: Option<String>,
    pub git_url: Option<String>,
    pub directory: Option<PathBuf>,
}

impl Default for ScaffoldRequest {
    fn default() -> Self {
        Self {
            project_type: None,
            default: false,
            output_dir: PathBuf::from(CURRENT_DIR),
            dev: false,
            local_dir: None,
            checkout: None,
            cookiecutter_url: None,
            git_url: None,
            directory: None,
        }
    }
}

/// Where a scaffold takes its template from, in order of precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldSource {
    /// Any cookiecutter template, remote or local.
    Cookiecutter(String),
    /// A repository (or a subdirectory of it) copied without rendering.
    Git(String),
    /// A local cookiecutter template used during template development.
    Local(PathBuf),
    /// One of the bundled project types.
    Project(ProjectType),
}

impl ScaffoldSource {
    /// Chooses the source for `request`, asking for a project type when
    /// nothing else identifies the template.
    pub fn resolve<P: PromptProvider + ?Sized>(request: &ScaffoldRequest, prompter: &P) -> Result<Self> {
        if let Some(url) = &request.cookiecutter_url {
            return Ok(ScaffoldSource::Cookiecutter(url.clone()));
        }
        if let Some(url) = &request.git_url {
            return Ok(ScaffoldSource::Git(url.clone()));
        }

        let project_type = match request.project_type {
            Some(project_type) => project_type,
            None => select_project_type(prompter)?,
        };

        match (&request.local_dir, request.dev) {
            (Some(dir), _) => Ok(ScaffoldSource::Local(dir.clone())),
            (None, true) => Ok(ScaffoldSource::Local(PathBuf::from(project_type.as_str()))),
            (None, false) => Ok(ScaffoldSource::Project(project_type)),
        }
    }
}

pub fn select_project_type<P: PromptProvider + ?Sized>(prompter: &P) -> Result<ProjectType> {
    let project_type = select(prompter, PROJECT_TYPE_PROMPT, &ProjectType::ALL, |project_type| {
        format!("{} {}", project_type.icon(), project_type)
    })?;
    Ok(*project_type)
}

/// Output directory for local scaffolds: `./scaffolded` instead of `.`.
pub fn local_output_dir(output_dir: &Path) -> PathBuf {
    if output_dir.is_current_dir() {
        output_dir.join(LOCAL_SCAFFOLD_DIR)
    } else {
        output_dir.to_path_buf()
    }
}

/// Runs scaffolds against the given settings, process runner and prompter.
pub struct Scaffolder<'a, P: PromptProvider + ?Sized> {
    settings: &'a Settings,
    runner: &'a dyn CommandRunner,
    prompter: &'a P,
}

impl<'a, P: PromptProvider + ?Sized> Scaffolder<'a, P> {
    pub fn new(settings: &'a Settings, runner: &'a dyn CommandRunner, prompter: &'a P) -> Self {
        Self { settings, runner, prompter }
    }

    pub fn scaffold(&self, request: &ScaffoldRequest) -> Result<()> {
        let source = ScaffoldSource::resolve(request, self.prompter)?;
        log::debug!("Scaffold source: {source:?}");

        match source {
            ScaffoldSource::Cookiecutter(url) => {
                println!("Scaffolding custom cookiecutter: {url}");
                let checkout = match TemplateSource::classify(&url) {
                    TemplateSource::Git(_) => Some(self.checkout_or_default(request)),
                    TemplateSource::FileSystem(_) => None,
                };
                let invocation = EngineInvocation::new(url, &request.output_dir)
                    .checkout(checkout)
                    .directory(request.directory.clone())
                    .no_input(request.default);
                CookiecutterEngine.generate(self.runner, &invocation)
            }
            ScaffoldSource::Git(url) => {
                println!("Scaffolding clone repo: {url}");
                let invocation = EngineInvocation::new(url, &request.output_dir)
                    .checkout(Some(self.checkout_or_default(request)))
                    .directory(request.directory.clone());
                RawGitEngine.generate(self.runner, &invocation)
            }
            ScaffoldSource::Local(dir) => {
                println!("Scaffolding local: {}", dir.display());
                let invocation =
                    EngineInvocation::new(path_arg(&dir), local_output_dir(&request.output_dir))
                        .no_input(request.default);
                CookiecutterEngine.generate(self.runner, &invocation)
            }
            ScaffoldSource::Project(project_type) => self.scaffold_project(project_type, request),
        }
    }

    fn checkout_or_default(&self, request: &ScaffoldRequest) -> String {
        request
            .checkout
            .clone()
            .filter(|checkout| !checkout.is_empty())
            .unwrap_or_else(|| self.settings.default_branch.clone())
    }

    /// The explicit checkout, else the latest tag of `location`, else the
    /// default branch when the repository has no usable tag.
    pub fn resolve_checkout(&self, location: &str, explicit: Option<&str>) -> Result<String> {
        if let Some(checkout) = explicit.filter(|c| !c.is_empty()) {
            return Ok(checkout.to_string());
        }
        let tag = latest_tag(self.runner, location)?;
        if tag.is_none() {
            log::info!(
                "No tag found for '{location}', using branch '{}'",
                self.settings.default_branch
            );
            return Ok(self.settings.default_branch.clone());
        }
        Ok(tag.to_string())
    }

    fn scaffold_project(&self, project_type: ProjectType, request: &ScaffoldRequest) -> Result<()> {
        let location = project_type.project_location(&self.settings.organization_location);
        let checkout = self.resolve_checkout(&location, request.checkout.as_deref())?;
        println!("Tag: {checkout}");
        println!("Scaffolding a {project_type} project template from {location}");

        let mut invocation = EngineInvocation::new(location, &request.output_dir)
            .checkout(Some(checkout))
            .directory(Some(PathBuf::from(project_type.as_str())))
            .no_input(request.default);

        if project_type.takes_project_options() {
            let options = ProjectOptions::with_author(author_info(self.runner)?);
            invocation = invocation.extra_context(options.extra_context());
        }
        CookiecutterEngine.generate(self.runner, &invocation)
    }

    /// Materializes a hub template with the engine its kind names. Repository
    /// templates without a checkout use the configured default branch.
    pub fn scaffold_hub_template(&self, template: &HubTemplate, output_dir: &Path) -> Result<()> {
        println!("Scaffolding '{}' from {}", template.name, template.template);
        let checkout = template.checkout.clone().filter(|c| !c.is_empty()).or_else(|| {
            TemplateSource::classify(&template.template)
                .is_repository()
                .then(|| self.settings.default_branch.clone())
        });
        let invocation = EngineInvocation::new(&template.template, output_dir)
            .checkout(checkout)
            .directory(template.directory.as_ref().map(PathBuf::from));
        engine_for(template.template_type).generate(self.runner, &invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::{failure, output, RecordingRunner};
    use crate::process::CommandSpec;
    use crate::prompt::AutomaticPrompter;
    use crate::types::TemplateKind;

    const TAGS: &str = "a\trefs/tags/0.1.9\nb\trefs/tags/0.1.10\n";

    fn settings() -> Settings {
        Settings::with_home("/tmp/tigr81-test-home")
    }

    /// git answers tag and author queries; engines succeed.
    fn runner(tags: &'static str) -> RecordingRunner {
        RecordingRunner::with_handler(move |spec: &CommandSpec| {
            let args: Vec<&str> = spec.args.iter().map(String::as_str).collect();
            match (spec.program.as_str(), args.as_slice()) {
                ("git", ["ls-remote", ..]) => Ok(output(0, tags)),
                ("git", ["config", "user.email"]) => Ok(output(0, "jane@example.com\n")),
                _ => Ok(output(0, "")),
            }
        })
    }

    fn engine_call(runner: &RecordingRunner) -> CommandSpec {
        runner.calls().into_iter().last().unwrap()
    }

    #[test]
    fn source_precedence() {
        let prompter = AutomaticPrompter::new();
        let request = ScaffoldRequest {
            cookiecutter_url: Some("ck".into()),
            git_url: Some("git".into()),
            project_type: Some(ProjectType::FastApi),
            ..ScaffoldRequest::default()
        };
        assert_eq!(
            ScaffoldSource::resolve(&request, &prompter).unwrap(),
            ScaffoldSource::Cookiecutter("ck".into())
        );

        let request = ScaffoldRequest { cookiecutter_url: None, ..request };
        assert_eq!(
            ScaffoldSource::resolve(&request, &prompter).unwrap(),
            ScaffoldSource::Git("git".into())
        );

        let request = ScaffoldRequest { git_url: None, dev: true, ..request };
        assert_eq!(
            ScaffoldSource::resolve(&request, &prompter).unwrap(),
            ScaffoldSource::Local(PathBuf::from("fastapi"))
        );

        let request = ScaffoldRequest { local_dir: Some("tpl".into()), ..request };
        assert_eq!(
            ScaffoldSource::resolve(&request, &prompter).unwrap(),
            ScaffoldSource::Local(PathBuf::from("tpl"))
        );
    }

    #[test]
    fn missing_project_type_is_asked() {
        let prompter = AutomaticPrompter::new().with_choice_response(PROJECT_TYPE_PROMPT, 1);
        let source = ScaffoldSource::resolve(&ScaffoldRequest::default(), &prompter).unwrap();
        assert_eq!(source, ScaffoldSource::Project(ProjectType::PoetryPkg));
    }

    #[test]
    fn local_output_goes_to_scaffolded() {
        assert_eq!(local_output_dir(Path::new(".")), PathBuf::from("./scaffolded"));
        assert_eq!(local_output_dir(Path::new("out")), PathBuf::from("out"));
    }

    #[test]
    fn project_scaffold_uses_latest_tag_and_author() {
        let settings = settings();
        let runner = runner(TAGS);
        let prompter = AutomaticPrompter::new();
        let request = ScaffoldRequest {
            project_type: Some(ProjectType::FastApi),
            default: true,
            ..ScaffoldRequest::default()
        };

        Scaffolder::new(&settings, &runner, &prompter).scaffold(&request).unwrap();

        let call = engine_call(&runner);
        assert_eq!(call.program, "cookiecutter");
        assert_eq!(
            call.args,
            vec![
                "https://github.com/tigr81/fastapi",
                "--output-dir",
                ".",
                "--checkout",
                "0.1.10",
                "--directory",
                "fastapi",
                "--no-input",
                "author_name=jane",
                "author_email=jane@example.com",
            ]
        );
    }

    #[test]
    fn prime_react_has_no_extra_context() {
        let settings = settings();
        let runner = runner(TAGS);
        let prompter = AutomaticPrompter::new();
        let request = ScaffoldRequest {
            project_type: Some(ProjectType::PrimeReact),
            checkout: Some("develop".into()),
            ..ScaffoldRequest::default()
        };

        Scaffolder::new(&settings, &runner, &prompter).scaffold(&request).unwrap();

        assert_eq!(runner.calls().len(), 1);
        let call = engine_call(&runner);
        assert!(call.args.contains(&"develop".to_string()));
        assert!(!call.args.iter().any(|arg| arg.starts_with("author_")));
    }

    #[test]
    fn tag_query_failure_falls_back_to_default_branch() {
        let settings = settings();
        let runner = RecordingRunner::with_handler(|spec| match spec.args.first().map(String::as_str) {
            Some("ls-remote") => Ok(failure("fatal: unable to access")),
            _ => Ok(output(0, "")),
        });
        let prompter = AutomaticPrompter::new();
        let scaffolder = Scaffolder::new(&settings, &runner, &prompter);

        assert_eq!(scaffolder.resolve_checkout("https://host/repo", None).unwrap(), "main");
        assert_eq!(scaffolder.resolve_checkout("https://host/repo", Some("1.0.0")).unwrap(), "1.0.0");
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn malformed_tag_aborts_scaffold() {
        let settings = settings();
        let runner = runner("a\trefs/tags/latest\n");
        let prompter = AutomaticPrompter::new();
        let request =
            ScaffoldRequest { project_type: Some(ProjectType::FastApi), ..ScaffoldRequest::default() };

        assert!(Scaffolder::new(&settings, &runner, &prompter).scaffold(&request).is_err());
        assert!(runner.calls().iter().all(|call| call.program == "git"));
    }

    #[test]
    fn remote_cookiecutter_url_defaults_checkout() {
        let settings = settings();
        let runner = runner("");
        let prompter = AutomaticPrompter::new();
        let request = ScaffoldRequest {
            cookiecutter_url: Some("https://github.com/u/tpl.git".into()),
            directory: Some("sub".into()),
            ..ScaffoldRequest::default()
        };

        Scaffolder::new(&settings, &runner, &prompter).scaffold(&request).unwrap();

        assert_eq!(
            engine_call(&runner).args,
            vec![
                "https://github.com/u/tpl.git",
                "--output-dir",
                ".",
                "--checkout",
                "main",
                "--directory",
                "sub",
            ]
        );
    }

    #[test]
    fn dev_scaffold_renders_local_template() {
        let settings = settings();
        let runner = runner("");
        let prompter = AutomaticPrompter::new();
        let request = ScaffoldRequest {
            project_type: Some(ProjectType::PoetryPkg),
            dev: true,
            ..ScaffoldRequest::default()
        };

        Scaffolder::new(&settings, &runner, &prompter).scaffold(&request).unwrap();

        assert_eq!(runner.calls().len(), 1);
        assert_eq!(
            engine_call(&runner).args,
            vec!["poetry_pkg", "--output-dir", "./scaffolded"]
        );
    }

    #[test]
    fn hub_template_without_checkout_uses_configured_branch() {
        let settings = Settings { default_branch: "develop".into(), ..settings() };
        let runner = runner("");
        let prompter = AutomaticPrompter::new();
        let template = HubTemplate {
            name: "api".into(),
            template: "https://github.com/org/templates.git".into(),
            checkout: None,
            directory: None,
            template_type: TemplateKind::Cookiecutter,
        };

        Scaffolder::new(&settings, &runner, &prompter)
            .scaffold_hub_template(&template, Path::new("out"))
            .unwrap();

        assert_eq!(
            engine_call(&runner).args,
            vec!["https://github.com/org/templates.git", "--output-dir", "out", "--checkout", "develop"]
        );
    }

    #[test]
    fn git_url_scaffold_keeps_checkout_and_repository_directory() {
        let settings = settings();
        let runner = runner("");
        let prompter = AutomaticPrompter::new();
        let request = ScaffoldRequest {
            git_url: Some("https://github.com/org/templates.git".into()),
            checkout: Some("1.0.0".into()),
            ..ScaffoldRequest::default()
        };

        // The fake git never creates `.git`, so the fetch stops after checkout.
        let err = Scaffolder::new(&settings, &runner, &prompter).scaffold(&request).unwrap_err();
        assert!(matches!(err, crate::error::Error::FetchIntegrity { .. }));
        assert_eq!(
            runner.arg_lists(),
            vec![
                vec!["clone", "--no-checkout", "https://github.com/org/templates.git", "templates"],
                vec!["-C", "templates", "checkout", "1.0.0"],
            ]
        );
    }

    #[test]
    fn hub_template_dispatches_on_kind() {
        let settings = settings();
        let runner = runner("");
        let prompter = AutomaticPrompter::new();
        let template = HubTemplate {
            name: "api".into(),
            template: "https://github.com/org/templates.git".into(),
            checkout: Some("v1".into()),
            directory: None,
            template_type: TemplateKind::Copier,
        };

        Scaffolder::new(&settings, &runner, &prompter)
            .scaffold_hub_template(&template, Path::new("out"))
            .unwrap();

        let call = engine_call(&runner);
        assert_eq!(call.program, "copier");
        assert_eq!(
            call.args,
            vec!["copy", "--vcs-ref", "v1", "https://github.com/org/templates.git", "out"]
        );
    }
}
