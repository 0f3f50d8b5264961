use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

/// File suffixes recognised as script templates.
pub const TEMPLATE_SUFFIXES: &[&str] = &[".sh", ".bash", ".sh.j2"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    /// File name, also used as the lookup key.
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// List templates directly inside `root`, sorted by name.
///
/// Hidden files and files without a template suffix are skipped. A missing
/// directory is not an error and yields an empty list.
pub fn discover_templates(root: &Path) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        tracing::warn!("templates directory {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if is_template_file(name) {
            out.push(TemplateInfo { name: name.to_string(), path: entry.path().to_path_buf() });
        }
    }

    tracing::debug!("discovered {} templates in {}", out.len(), root.display());
    Ok(out)
}

fn is_template_file(name: &str) -> bool {
    !name.starts_with('.') && TEMPLATE_SUFFIXES.iter().any(|s| name.ends_with(s))
}
