pub mod doctor;
pub mod fields;
pub mod list_templates;
pub mod render;
pub mod roots;
pub mod save;

use scriptpad_core::config::loader::{default_config_path, ConfigLoader};
use scriptpad_core::config::types::ResolvedConfig;
use scriptpad_core::templates::repository::{LoadedTemplate, TemplateRepository};
use serde::Serialize;
use std::path::Path;

/// Print the standard failure header and message, then exit with status 1.
pub fn fail(cmd: &str, msg: impl std::fmt::Display) -> ! {
    println!("FAIL spad {cmd}");
    println!("{msg}");
    std::process::exit(1);
}

/// Load config and start logging, or report the failure and exit.
pub fn load_config(cmd: &str, config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc);
            tracing::debug!("loaded profile '{}'", rc.active_profile);
            rc
        }
        Err(e) => {
            println!("FAIL spad {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Read a template by name from the configured templates directory.
pub fn load_template(cmd: &str, cfg: &ResolvedConfig, name: &str) -> LoadedTemplate {
    let repo = match TemplateRepository::new(&cfg.templates_dir) {
        Ok(r) => r,
        Err(e) => fail(cmd, e),
    };
    match repo.get_by_name(name) {
        Ok(t) => t,
        Err(e) => fail(cmd, e),
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

/// Report scan warnings on stderr so stdout stays usable.
pub fn print_warnings(messages: &[String]) {
    for msg in messages {
        tracing::warn!("{msg}");
        eprintln!("warning: {msg}");
    }
}
