//! Shell completion support with dynamic value completers.
//!
//! Enable with e.g. `source <(COMPLETE=bash spad)`; template names are read
//! from the active profile's templates directory at completion time.

use clap_complete::engine::CompletionCandidate;
use scriptpad_core::config::loader::ConfigLoader;
use scriptpad_core::templates::repository::TemplateRepository;
use std::ffi::OsStr;

/// Complete template names from TemplateRepository.
pub fn complete_templates(current: &OsStr) -> Vec<CompletionCandidate> {
    let current_str = current.to_str().unwrap_or("");

    let Ok(cfg) = ConfigLoader::load(None, None) else {
        return Vec::new();
    };
    let Ok(repo) = TemplateRepository::new(&cfg.templates_dir) else {
        return Vec::new();
    };

    repo.list_all()
        .iter()
        .filter(|info| info.name.starts_with(current_str))
        .map(|info| CompletionCandidate::new(&info.name))
        .collect()
}
