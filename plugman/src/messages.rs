//! Central registry for user-facing message templates.
//!
//! Templates use `{variable}` syntax for runtime values, substituted by the
//! `msg!` macro from plugman-core.

pub struct Messages {
    // Configuration
    pub config_log_folder: &'static str,
    pub config_manifest: &'static str,
    pub config_plugins_source: &'static str,
    pub config_target_dir: &'static str,

    // Discovery / listing
    pub discovery_source_missing: &'static str,
    pub list_empty: &'static str,
    pub list_header: &'static str,
    pub list_item: &'static str,
    pub list_item_installed: &'static str,

    // Install
    pub install_bad_entry_spec: &'static str,
    pub install_entry_already_registered: &'static str,
    pub install_entry_prompt: &'static str,
    pub install_no_entry_candidates: &'static str,
    pub install_nothing_selected: &'static str,
    pub install_select_prompt: &'static str,
    pub install_success: &'static str,
    pub install_unknown_plugin: &'static str,

    // Errors
    pub error_generic: &'static str,
}

pub const MESSAGES: Messages = Messages {
    config_log_folder: "Manifest log folder:  {value}",
    config_manifest: "Manifest file:        {path}",
    config_plugins_source: "Plugin sources:       {path}",
    config_target_dir: "Install target:       {path}",

    discovery_source_missing: "Plugins folder not found: {path}",
    list_empty: "No plugins found.",
    list_header: "Available plugins:",
    list_item: "  • {name}",
    list_item_installed: "  • {name} (installed)",

    install_bad_entry_spec: "Invalid --entry value '{spec}' (expected NAME=RELATIVE_PATH)",
    install_entry_already_registered: "  {file} is already registered in the manifest, entry kept as-is",
    install_entry_prompt: "Entry file for '{name}'",
    install_no_entry_candidates: "Plugin '{name}' contains no files to choose as an entry file",
    install_nothing_selected: "Select at least one plugin to install.",
    install_select_prompt: "Select plugins to install",
    install_success: "Plugins installed successfully!",
    install_unknown_plugin: "Plugin '{name}' was not found in the plugins folder",

    error_generic: "❌ {error}",
};
