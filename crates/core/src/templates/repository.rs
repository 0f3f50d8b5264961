use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::templates::discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
use crate::templates::engine::{RenderContext, RenderResult, render_scanned};
use crate::templates::scanner::{ScanOutcome, scan};

#[derive(Debug, Error)]
pub enum TemplateRepoError {
    #[error(transparent)]
    Discovery(#[from] TemplateDiscoveryError),

    #[error("invalid template name: {0:?}")]
    InvalidName(String),

    #[error("template not found: {0}")]
    NotFound(String),

    #[error("template {path} is not UTF-8 text")]
    NotText { path: PathBuf },

    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct LoadedTemplate {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl LoadedTemplate {
    /// Scan the current content. Results are not cached.
    pub fn scan(&self) -> ScanOutcome {
        scan(&self.content)
    }

    pub fn render(&self, ctx: &RenderContext) -> RenderResult {
        let outcome = self.scan();
        render_scanned(&self.content, &outcome, ctx)
    }
}

pub struct TemplateRepository {
    pub root: PathBuf,
    pub templates: Vec<TemplateInfo>,
}

impl TemplateRepository {
    pub fn new(root: &Path) -> Result<Self, TemplateDiscoveryError> {
        let templates = discover_templates(root)?;
        Ok(Self { root: root.to_path_buf(), templates })
    }

    pub fn list_all(&self) -> &[TemplateInfo] {
        &self.templates
    }

    /// Read a template by file name. The file is read fresh on every call.
    pub fn get_by_name(&self, name: &str) -> Result<LoadedTemplate, TemplateRepoError> {
        if !is_plain_name(name) {
            return Err(TemplateRepoError::InvalidName(name.to_string()));
        }

        let info = self
            .templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| TemplateRepoError::NotFound(name.to_string()))?;

        let content = fs::read_to_string(&info.path).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                TemplateRepoError::NotText { path: info.path.clone() }
            } else {
                TemplateRepoError::Io { path: info.path.clone(), source: e }
            }
        })?;

        tracing::debug!("loaded template {} ({} bytes)", info.path.display(), content.len());

        Ok(LoadedTemplate { name: info.name.clone(), path: info.path.clone(), content })
    }
}

/// A single path component with no traversal.
pub(crate) fn is_plain_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}
