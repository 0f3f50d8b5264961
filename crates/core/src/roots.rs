//! Allowed output roots and saving of rendered scripts.
//!
//! A rendered script may only be written into a directory that equals, or lies
//! below, one of the configured roots. Both sides are compared after resolving
//! symlinks, component by component.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::types::ResolvedConfig;
use crate::templates::repository::is_plain_name;

/// Environment variable naming one more allowed root.
pub const ROOT_ENV: &str = "SCRIPTPAD_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Root {
    pub id: String,
    pub label: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("invalid filename: {0:?}")]
    InvalidFilename(String),

    #[error("directory {0} is not under an allowed root")]
    OutsideRoots(PathBuf),

    #[error("directory {0} cannot be resolved")]
    Unresolvable(PathBuf),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AllowedRoots {
    roots: Vec<Root>,
}

impl AllowedRoots {
    /// Home directory, `$SCRIPTPAD_ROOT`, then the profile's `extra_roots`.
    ///
    /// Entries that are not existing directories are skipped, duplicates dropped.
    pub fn resolve(cfg: &ResolvedConfig) -> Self {
        let mut roots = Self::default();

        if cfg.include_home
            && let Some(home) = dirs::home_dir()
        {
            roots.push("home", "Home directory", &home);
        }
        if let Some(env_root) = env::var_os(ROOT_ENV) {
            roots.push("env_root", "Environment root", Path::new(&env_root));
        }
        for (i, extra) in cfg.extra_roots.iter().enumerate() {
            let id = if i == 0 { "extra".to_string() } else { format!("extra_{i}") };
            roots.push(&id, "Configured root", extra);
        }

        roots
    }

    /// Build from explicit directories; non-directories are skipped.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut roots = Self::default();
        for (i, p) in paths.iter().enumerate() {
            roots.push(&format!("root_{i}"), "Root", p.as_ref());
        }
        roots
    }

    fn push(&mut self, id: &str, label: &str, path: &Path) {
        match path.canonicalize() {
            Ok(real) if real.is_dir() => {
                if self.roots.iter().all(|r| r.path != real) {
                    self.roots.push(Root {
                        id: id.to_string(),
                        label: label.to_string(),
                        path: real,
                    });
                }
            }
            _ => tracing::warn!("ignoring root {}: not a directory", path.display()),
        }
    }

    pub fn list(&self) -> &[Root] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The root containing `path`, which must already be resolved.
    pub fn root_for(&self, path: &Path) -> Option<&Root> {
        self.roots.iter().find(|r| path.starts_with(&r.path))
    }

    /// Write `content` to `dir/filename`, creating `dir` if needed.
    ///
    /// An existing file is overwritten. Returns the path written.
    pub fn save(&self, dir: &Path, filename: &str, content: &str) -> Result<PathBuf, SaveError> {
        if !is_plain_name(filename) {
            return Err(SaveError::InvalidFilename(filename.to_string()));
        }

        let target_dir = resolve_dir(dir)?;
        let Some(root) = self.root_for(&target_dir) else {
            return Err(SaveError::OutsideRoots(target_dir));
        };
        tracing::debug!("saving under root '{}' ({})", root.id, root.path.display());

        fs::create_dir_all(&target_dir)
            .map_err(|e| SaveError::CreateDir { path: target_dir.clone(), source: e })?;

        let file_path = target_dir.join(filename);
        fs::write(&file_path, content)
            .map_err(|e| SaveError::Write { path: file_path.clone(), source: e })?;

        tracing::info!("saved script to {}", file_path.display());
        Ok(file_path)
    }
}

/// Resolve symlinks in the existing prefix of `dir`; the missing tail is
/// appended as-is and must not contain `..`.
fn resolve_dir(dir: &Path) -> Result<PathBuf, SaveError> {
    let abs = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|_| SaveError::Unresolvable(dir.to_path_buf()))?
            .join(dir)
    };

    let mut existing = abs.as_path();
    let mut tail: Vec<OsString> = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => return Err(SaveError::Unresolvable(abs)),
        }
    }

    let mut resolved =
        existing.canonicalize().map_err(|_| SaveError::Unresolvable(abs.clone()))?;
    for name in tail.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}
