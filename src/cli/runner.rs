use crate::{
    cli::{hub, Commands, HubCommands},
    config::Settings,
    error::Result,
    hub::HubRegistry,
    process::{CommandRunner, SystemCommandRunner},
    prompt::{get_prompt_provider, PromptProvider},
    scaffold::{ScaffoldRequest, Scaffolder},
};

/// Dispatches a parsed command against one set of collaborators.
pub struct Runner<'a, P: PromptProvider + ?Sized> {
    settings: &'a Settings,
    commands: &'a dyn CommandRunner,
    prompter: &'a P,
}

impl<'a, P: PromptProvider + ?Sized> Runner<'a, P> {
    pub fn new(settings: &'a Settings, commands: &'a dyn CommandRunner, prompter: &'a P) -> Self {
        Self { settings, commands, prompter }
    }

    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Version => {
                print!("{}", version_text(self.settings));
                Ok(())
            }
            Commands::Scaffold(args) => self.scaffolder().scaffold(&ScaffoldRequest::from(args)),
            Commands::Hub { command } => self.run_hub(command),
        }
    }

    fn scaffolder(&self) -> Scaffolder<'a, P> {
        Scaffolder::new(self.settings, self.commands, self.prompter)
    }

    fn run_hub(&self, command: HubCommands) -> Result<()> {
        let registry = HubRegistry::new(self.settings);
        match command {
            HubCommands::Add => {
                hub::handle_add(&registry, self.prompter, &self.settings.default_branch)
            }
            HubCommands::List { name } => hub::handle_list(&registry, name.as_deref()),
            HubCommands::Remove { name } => {
                hub::handle_remove(&registry, &name, &mut std::io::stdout())
            }
            HubCommands::Scaffold { hub, template, output_dir } => hub::handle_scaffold(
                &registry,
                &self.scaffolder(),
                self.prompter,
                hub.as_deref(),
                template.as_deref(),
                &output_dir,
            ),
        }
    }
}

/// Text printed by `version`.
pub fn version_text(settings: &Settings) -> String {
    format!(
        "v{}\n\nCheck out for new versions:\n- {}\n- {}\n",
        env!("CARGO_PKG_VERSION"),
        settings.package_url,
        settings.repo_location
    )
}

/// Runs `command` with the real `git`/engine executables and terminal prompts.
pub fn run(command: Commands, settings: &Settings) -> Result<()> {
    let commands = SystemCommandRunner::new();
    let prompter = get_prompt_provider();
    Runner::new(settings, &commands, &prompter).run(command)
}
