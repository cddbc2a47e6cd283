//! Adapters for the external template engines.
//!
//! Rendering is never done in-process: each engine translates an
//! [`EngineInvocation`] into a command line and hands it to a [`CommandRunner`].

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::constants::engines::{COOKIECUTTER, COPIER};
use crate::error::Result;
use crate::ext::PathExt;
use crate::git::fetch_subdirectory;
use crate::ioutils::copy_dir;
use crate::process::{path_arg, CommandRunner, CommandSpec};
use crate::template::source::TemplateSource;
use crate::types::TemplateKind;

/// Everything an engine needs to materialize one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInvocation {
    /// Template location: a repository URL or a local directory.
    pub source: String,
    pub output_dir: PathBuf,
    /// Reference to check out; ignored for local sources.
    pub checkout: Option<String>,
    /// Subdirectory of the source holding the template.
    pub directory: Option<PathBuf>,
    /// Accept every default instead of prompting.
    pub no_input: bool,
    pub extra_context: IndexMap<String, String>,
}

impl EngineInvocation {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(source: S, output_dir: P) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            checkout: None,
            directory: None,
            no_input: false,
            extra_context: IndexMap::new(),
        }
    }

    pub fn checkout(mut self, checkout: Option<String>) -> Self {
        self.checkout = checkout.filter(|c| !c.is_empty());
        self
    }

    pub fn directory(mut self, directory: Option<PathBuf>) -> Self {
        self.directory = directory.filter(|d| !d.is_current_dir());
        self
    }

    pub fn no_input(mut self, no_input: bool) -> Self {
        self.no_input = no_input;
        self
    }

    pub fn extra_context(mut self, extra_context: IndexMap<String, String>) -> Self {
        self.extra_context = extra_context;
        self
    }

    /// Sources `git` can clone go through the fetcher; plain directories are read in place.
    fn is_repository(&self) -> bool {
        TemplateSource::classify(&self.source).is_repository()
    }

    fn context_pairs(&self) -> impl Iterator<Item = String> + '_ {
        self.extra_context.iter().map(|(key, value)| format!("{key}={value}"))
    }
}

/// An external program that turns a template into a project.
pub trait TemplateEngine {
    fn kind(&self) -> TemplateKind;

    fn generate(&self, runner: &dyn CommandRunner, invocation: &EngineInvocation) -> Result<()>;
}

/// Returns the engine for a template kind.
pub fn engine_for(kind: TemplateKind) -> Box<dyn TemplateEngine> {
    match kind {
        TemplateKind::Cookiecutter => Box::new(CookiecutterEngine),
        TemplateKind::Copier => Box::new(CopierEngine),
        TemplateKind::RawGit => Box::new(RawGitEngine),
    }
}

/// `cookiecutter <src> --output-dir <dir> [--checkout] [--directory] [--no-input] [k=v...]`
#[derive(Debug, Default)]
pub struct CookiecutterEngine;

impl CookiecutterEngine {
    pub fn command(&self, invocation: &EngineInvocation) -> CommandSpec {
        let mut spec = CommandSpec::new(COOKIECUTTER)
            .arg(&invocation.source)
            .args(["--output-dir".to_string(), path_arg(&invocation.output_dir)]);

        if let Some(checkout) = &invocation.checkout {
            spec = spec.args(["--checkout", checkout.as_str()]);
        }
        if let Some(directory) = &invocation.directory {
            spec = spec.args(["--directory".to_string(), path_arg(directory)]);
        }
        if invocation.no_input {
            spec = spec.arg("--no-input");
        }
        spec.args(invocation.context_pairs()).interactive()
    }
}

impl TemplateEngine for CookiecutterEngine {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Cookiecutter
    }

    fn generate(&self, runner: &dyn CommandRunner, invocation: &EngineInvocation) -> Result<()> {
        runner.run(&self.command(invocation))?;
        Ok(())
    }
}

/// `copier copy [--vcs-ref] [--defaults] [--data k=v...] <src> <dst>`
///
/// Copier has no subdirectory option, so a template living below the root of
/// a repository is fetched first and rendered from the fetched copy.
#[derive(Debug, Default)]
pub struct CopierEngine;

impl CopierEngine {
    pub fn command(&self, source: &str, checkout: Option<&str>, invocation: &EngineInvocation) -> CommandSpec {
        let mut spec = CommandSpec::new(COPIER).arg("copy");

        if let Some(checkout) = checkout {
            spec = spec.args(["--vcs-ref", checkout]);
        }
        if invocation.no_input {
            spec = spec.arg("--defaults");
        }
        for pair in invocation.context_pairs() {
            spec = spec.arg("--data").arg(pair);
        }
        spec.arg(source).arg(path_arg(&invocation.output_dir)).interactive()
    }
}

impl TemplateEngine for CopierEngine {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Copier
    }

    fn generate(&self, runner: &dyn CommandRunner, invocation: &EngineInvocation) -> Result<()> {
        let checkout = invocation.checkout.as_deref();

        match (&invocation.directory, invocation.is_repository()) {
            (None, _) => {
                runner.run(&self.command(&invocation.source, checkout, invocation))?;
            }
            (Some(directory), false) => {
                let source = path_arg(Path::new(&invocation.source).join(directory));
                runner.run(&self.command(&source, None, invocation))?;
            }
            (Some(directory), true) => {
                let staging = tempfile::tempdir()?;
                let fetched = fetch_subdirectory(
                    runner,
                    &invocation.source,
                    checkout,
                    directory,
                    &staging.path().join("template"),
                )?;
                runner.run(&self.command(&path_arg(&fetched), None, invocation))?;
                staging.close()?;
            }
        }
        Ok(())
    }
}

/// Plain copy of a repository subdirectory or a local directory, no substitution.
///
/// Repositories, local working copies included, are fetched at the requested
/// checkout. Only directories that are not repositories are copied as they are.
#[derive(Debug, Default)]
pub struct RawGitEngine;

impl TemplateEngine for RawGitEngine {
    fn kind(&self) -> TemplateKind {
        TemplateKind::RawGit
    }

    fn generate(&self, runner: &dyn CommandRunner, invocation: &EngineInvocation) -> Result<()> {
        let directory = invocation.directory.clone().unwrap_or_default();

        if !invocation.is_repository() {
            if let Some(checkout) = &invocation.checkout {
                log::warn!(
                    "'{}' is not a repository, checkout '{checkout}' is ignored",
                    invocation.source
                );
            }
            let source = Path::new(&invocation.source).join(&directory);
            return copy_dir(source, &invocation.output_dir);
        }

        let destination = fetch_subdirectory(
            runner,
            &invocation.source,
            invocation.checkout.as_deref(),
            &directory,
            &invocation.output_dir,
        )?;
        log::info!("Fetched '{}' into '{}'", invocation.source, destination.display());
        Ok(())
    }
}
