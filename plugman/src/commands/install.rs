use std::path::Path;

use anyhow::Context;
use dialoguer::{MultiSelect, Select};

use plugman_core::error::{PlugmanError, Result};
use plugman_core::{msg, pm_info, pm_println, pm_success};
use plugman_plugin::{discover_plugins, install, InstallerConfig, PluginItem};

use crate::commands::list::render_items;
use crate::messages::MESSAGES;

/// Runs an install pass.
///
/// With plugin names the command is fully scripted: selection comes from the
/// arguments and entry files from `--entry` pairs. Without names it runs an
/// interactive session with a checkbox list and a per-plugin entry picker.
pub fn handle_install(
    config: &InstallerConfig,
    names: &[String],
    entry_specs: &[String],
) -> Result<()> {
    let mut items = discover_plugins(config)?;

    if names.is_empty() {
        if items.is_empty() {
            pm_println!("{}", MESSAGES.list_empty);
            return Ok(());
        }
        select_interactively(&mut items)?;
    } else {
        for name in names {
            find_item(&mut items, name)?.set_selected(true);
        }
    }

    for (name, relative) in parse_entry_specs(entry_specs)? {
        find_item(&mut items, &name)?.choose_entry_file(Path::new(&relative))?;
    }

    if names.is_empty() {
        for item in items
            .iter_mut()
            .filter(|item| item.selected && item.entry_relative_path.is_none())
        {
            pick_entry_file(item)?;
        }
    }

    match install(&items, config) {
        Ok(outcome) => {
            pm_success!("{}", MESSAGES.install_success);
            for file in &outcome.already_registered {
                pm_println!(
                    "{}",
                    msg!(MESSAGES.install_entry_already_registered, file = file)
                );
            }

            // Fresh discovery pass so new installs render as installed.
            let refreshed = discover_plugins(config)?;
            render_items(&refreshed);
            Ok(())
        }
        Err(PlugmanError::NothingSelected) => {
            pm_info!("{}", MESSAGES.install_nothing_selected);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn find_item<'a>(items: &'a mut [PluginItem], name: &str) -> Result<&'a mut PluginItem> {
    items
        .iter_mut()
        .find(|item| item.name == name)
        .ok_or_else(|| {
            PlugmanError::Validation(msg!(MESSAGES.install_unknown_plugin, name = name))
        })
}

fn parse_entry_specs(specs: &[String]) -> Result<Vec<(String, String)>> {
    specs
        .iter()
        .map(|spec| {
            spec.split_once('=')
                .map(|(name, relative)| (name.to_string(), relative.to_string()))
                .ok_or_else(|| {
                    PlugmanError::Validation(msg!(MESSAGES.install_bad_entry_spec, spec = spec))
                })
        })
        .collect()
}

fn select_interactively(items: &mut [PluginItem]) -> Result<()> {
    let labels: Vec<String> = items
        .iter()
        .map(|item| {
            if item.installed {
                format!("{} (installed)", item.name)
            } else {
                item.name.clone()
            }
        })
        .collect();

    let picked = MultiSelect::new()
        .with_prompt(MESSAGES.install_select_prompt)
        .items(&labels)
        .interact()
        .context("plugin selection prompt failed")?;

    for index in picked {
        if let Some(item) = items.get_mut(index) {
            item.set_selected(true);
        }
    }
    Ok(())
}

fn pick_entry_file(item: &mut PluginItem) -> Result<()> {
    let candidates = item.entry_candidates()?;
    if candidates.is_empty() {
        return Err(PlugmanError::Validation(msg!(
            MESSAGES.install_no_entry_candidates,
            name = &item.name
        )));
    }

    let index = Select::new()
        .with_prompt(msg!(MESSAGES.install_entry_prompt, name = &item.name))
        .items(&candidates)
        .default(0)
        .interact()
        .context("entry file prompt failed")?;

    item.choose_entry_file(Path::new(&candidates[index]))
}
