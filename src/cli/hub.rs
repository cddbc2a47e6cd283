//! Handlers of the `hub` subcommands.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ext::PrettyList;
use crate::hub::prompt::prompt_hub;
use crate::hub::{get_template_from_hubs, Hub, HubRegistry, Hubs};
use crate::prompt::{display_name, select, PromptProvider};
use crate::scaffold::Scaffolder;

pub fn handle_add<P: PromptProvider + ?Sized>(
    registry: &HubRegistry,
    prompter: &P,
    default_branch: &str,
) -> Result<()> {
    let hub = prompt_hub(prompter, default_branch)?;
    let path = registry.add(&hub)?;
    println!("Hub {} saved to {}", hub.name, path.display());
    Ok(())
}

/// Text printed by `hub list`.
pub fn list_text(hubs: &Hubs, name: Option<&str>) -> Result<String> {
    match name {
        None => {
            let mut text = String::from("Your hub templates are:\n");
            for name in hubs.keys() {
                text.push_str(name);
                text.push('\n');
            }
            Ok(text)
        }
        Some(name) => {
            let hub = hubs.get(name).ok_or_else(|| Error::HubNotFound { hub: name.to_string() })?;
            Ok(format!("Info about hub {name}\n{hub}"))
        }
    }
}

pub fn handle_list(registry: &HubRegistry, name: Option<&str>) -> Result<()> {
    let hubs = registry.load()?;
    print!("{}", list_text(&hubs, name)?);
    Ok(())
}

/// Removes a user hub. Nothing is printed for a hub that cannot be removed.
pub fn handle_remove<W: Write>(registry: &HubRegistry, name: &str, out: &mut W) -> Result<()> {
    Hub::validate_name(name)?;
    let user_hubs = registry.user_hubs()?;
    if !user_hubs.contains_key(name) {
        let names = user_hubs.keys().collect::<Vec<_>>();
        log::info!("Removable hubs: {}", names.pretty_list());
        return Err(Error::HubNotFound { hub: name.to_string() });
    }

    writeln!(out, "Deleting hub {name}...")?;
    registry.remove(name)?;
    writeln!(out, "Hub {name} deleted successfully")?;
    Ok(())
}

/// Resolves hub and template, asking for whichever was not given.
pub fn handle_scaffold<P: PromptProvider + ?Sized>(
    registry: &HubRegistry,
    scaffolder: &Scaffolder<'_, P>,
    prompter: &P,
    hub: Option<&str>,
    template: Option<&str>,
    output_dir: &Path,
) -> Result<()> {
    let hubs = registry.load()?;

    let hub_name = match hub {
        Some(hub) => hub.to_string(),
        None => {
            let names = hubs.keys().cloned().collect::<Vec<_>>();
            select(prompter, "Select the hub from which to scaffold the template", &names, |name| {
                display_name(name)
            })?
            .clone()
        }
    };
    let selected_hub =
        hubs.get(&hub_name).ok_or_else(|| Error::HubNotFound { hub: hub_name.clone() })?;

    let template_name = match template {
        Some(template) => template.to_string(),
        None => {
            let names = selected_hub.hub_templates.keys().cloned().collect::<Vec<_>>();
            let prompt = format!("Select a template from the hub '{hub_name}'");
            select(prompter, &prompt, &names, |name| display_name(name))?.clone()
        }
    };

    let hub_template = get_template_from_hubs(&hubs, &hub_name, &template_name)?;
    scaffolder.scaffold_hub_template(hub_template, output_dir)
}
