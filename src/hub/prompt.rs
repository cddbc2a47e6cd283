//! Interactive construction of hubs and hub templates.

use crate::constants::{CURRENT_DIR, DEFAULT_HUB_NAME};
use crate::error::Result;
use crate::hub::models::{Hub, HubTemplate};
use crate::prompt::{ask_text, confirm, select, PromptProvider};
use crate::template::{extract_template_name, TemplateSource};
use crate::types::TemplateKind;

pub const HUB_NAME_PROMPT: &str = "Enter the hub name";
pub const ADD_TEMPLATE_PROMPT: &str = "Do you want to add a template? (y/n)";
pub const TEMPLATE_KIND_PROMPT: &str = "Select a template type";
pub const TEMPLATE_LOCATION_PROMPT: &str = "Enter the template location (git repo, local)";
pub const TEMPLATE_NAME_PROMPT: &str = "Enter the template name";
pub const CHECKOUT_PROMPT: &str = "Enter the checkout (only needed for remote template)";
pub const DIRECTORY_PROMPT: &str =
    "Enter the relative path to a template in a repository (only needed for remote template)";

/// Asks for a hub name, then for templates until the user declines.
///
/// `default_branch` pre-fills the checkout of repository templates.
pub fn prompt_hub<P: PromptProvider + ?Sized>(provider: &P, default_branch: &str) -> Result<Hub> {
    let name = ask_text(provider, HUB_NAME_PROMPT, Some(DEFAULT_HUB_NAME))?;
    Hub::validate_name(&name)?;
    let mut hub = Hub::new(name);

    while confirm(provider, ADD_TEMPLATE_PROMPT, true)? {
        hub.insert(prompt_hub_template(provider, default_branch)?);
    }
    Ok(hub)
}

/// Asks for one template. Checkout and directory are only asked for
/// repositories, remote or local.
pub fn prompt_hub_template<P: PromptProvider + ?Sized>(
    provider: &P,
    default_branch: &str,
) -> Result<HubTemplate> {
    let template_type = *select(provider, TEMPLATE_KIND_PROMPT, &TemplateKind::ALL, |kind| {
        kind.to_string()
    })?;
    let template = ask_text(provider, TEMPLATE_LOCATION_PROMPT, None)?;

    let extracted = extract_template_name(&template)?;
    let name = ask_text(provider, TEMPLATE_NAME_PROMPT, Some(&extracted))?;

    let (checkout, directory) = if !TemplateSource::classify(&template).is_repository() {
        (None, None)
    } else {
        (
            Some(ask_text(provider, CHECKOUT_PROMPT, Some(default_branch))?),
            Some(ask_text(provider, DIRECTORY_PROMPT, Some(CURRENT_DIR))?),
        )
    };

    Ok(HubTemplate { name, template, checkout, directory, template_type })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::prompt::AutomaticPrompter;

    #[test]
    fn remote_template_asks_checkout_and_directory() {
        let prompter = AutomaticPrompter::new()
            .with_choice_response(TEMPLATE_KIND_PROMPT, 0)
            .with_text_response(TEMPLATE_LOCATION_PROMPT, "http://example.com/example-template.git")
            .with_text_response(CHECKOUT_PROMPT, "main")
            .with_text_response(DIRECTORY_PROMPT, "subfolder");

        let template = prompt_hub_template(&prompter, "main").unwrap();
        assert_eq!(template.template_type, TemplateKind::Cookiecutter);
        assert_eq!(template.template, "http://example.com/example-template.git");
        assert_eq!(template.name, "example-template");
        assert_eq!(template.checkout.as_deref(), Some("main"));
        assert_eq!(template.directory.as_deref(), Some("subfolder"));
    }

    #[test]
    fn local_template_skips_remote_questions() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("local-tpl");
        std::fs::create_dir(&dir).unwrap();

        let prompter = AutomaticPrompter::new()
            .with_choice_response(TEMPLATE_KIND_PROMPT, 2)
            .with_text_response(TEMPLATE_LOCATION_PROMPT, dir.to_str().unwrap())
            .with_text_response(TEMPLATE_NAME_PROMPT, "renamed");

        let template = prompt_hub_template(&prompter, "main").unwrap();
        assert_eq!(template.template_type, TemplateKind::RawGit);
        assert_eq!(template.name, "renamed");
        assert_eq!(template.checkout, None);
        assert_eq!(template.directory, None);
    }

    #[test]
    fn invalid_location_fails() {
        let prompter = AutomaticPrompter::new()
            .with_text_response(TEMPLATE_LOCATION_PROMPT, "/non/existent/path");
        assert!(matches!(
            prompt_hub_template(&prompter, "main"),
            Err(Error::InvalidTemplateReference { .. })
        ));
    }

    #[test]
    fn hub_prompt_loops_until_declined() {
        let prompter = AutomaticPrompter::new()
            .with_text_response(HUB_NAME_PROMPT, "hub1")
            .with_confirmation_response(ADD_TEMPLATE_PROMPT, true)
            .with_confirmation_response(ADD_TEMPLATE_PROMPT, true)
            .with_confirmation_response(ADD_TEMPLATE_PROMPT, false)
            .with_text_response(TEMPLATE_LOCATION_PROMPT, "https://github.com/u/first.git")
            .with_text_response(TEMPLATE_LOCATION_PROMPT, "https://github.com/u/second.git");

        let hub = prompt_hub(&prompter, "main").unwrap();
        assert_eq!(hub.name, "hub1");
        assert_eq!(hub.hub_templates.keys().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn checkout_defaults_to_given_branch() {
        let prompter = AutomaticPrompter::new()
            .with_text_response(TEMPLATE_LOCATION_PROMPT, "https://github.com/u/api.git");

        let template = prompt_hub_template(&prompter, "develop").unwrap();
        assert_eq!(template.checkout.as_deref(), Some("develop"));
        assert_eq!(template.directory.as_deref(), Some("."));
    }

    #[test]
    fn local_repository_asks_checkout() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("templates");
        std::fs::create_dir_all(repo.join(".git")).unwrap();
        let prompter = AutomaticPrompter::new()
            .with_text_response(TEMPLATE_LOCATION_PROMPT, repo.to_str().unwrap())
            .with_text_response(CHECKOUT_PROMPT, "1.0.0");

        let template = prompt_hub_template(&prompter, "main").unwrap();
        assert_eq!(template.name, "templates");
        assert_eq!(template.checkout.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn hub_name_with_separator_is_refused() {
        let prompter = AutomaticPrompter::new().with_text_response(HUB_NAME_PROMPT, "a/b");
        assert!(matches!(
            prompt_hub(&prompter, "main"),
            Err(Error::InvalidHubName { .. })
        ));
    }

    #[test]
    fn hub_prompt_defaults() {
        let prompter = AutomaticPrompter::new()
            .with_confirmation_response(ADD_TEMPLATE_PROMPT, false);
        let hub = prompt_hub(&prompter, "main").unwrap();
        assert_eq!(hub.name, "my-hub");
        assert!(hub.hub_templates.is_empty());
    }
}
