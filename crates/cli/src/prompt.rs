//! Interactive prompts for collecting placeholder values.
//!
//! This module provides functionality to:
//! - Prompt users for placeholders not given with `--var`
//! - Pre-fill prompts with declared defaults
//! - Support batch mode (non-interactive) for CI/scripting

use dialoguer::{theme::ColorfulTheme, Input};
use scriptpad_core::templates::scanner::is_identifier;
use scriptpad_core::templates::{PlaceholderSet, RenderContext};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt; missing values are left to the renderer.
    pub batch_mode: bool,
}

/// Result of value collection.
#[derive(Debug)]
pub struct CollectedVars {
    /// Provided and prompted values.
    pub values: RenderContext,
    /// Placeholders that were prompted for.
    pub prompted: Vec<String>,
}

/// Error type for value collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Collect values for every placeholder in `set`.
///
/// Values already in `provided` (and not blank) are kept. Others are prompted
/// for when stdin is a terminal and batch mode is off; otherwise they are left
/// out so the renderer falls back to the default or reports them unresolved.
pub fn collect_values(
    set: &PlaceholderSet,
    provided: &RenderContext,
    options: &PromptOptions,
) -> Result<CollectedVars, PromptError> {
    let mut values = provided.clone();
    let mut prompted = Vec::new();

    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    if !is_interactive {
        return Ok(CollectedVars { values, prompted });
    }

    for decl in set.declarations() {
        let has_value =
            values.get(&decl.identifier).is_some_and(|v| !v.trim().is_empty());
        if has_value {
            continue;
        }

        let value = match decl.default_expression.as_deref() {
            Some(default) => prompt_with_default(&decl.identifier, default)?,
            None => prompt_required(&decl.identifier)?,
        };
        prompted.push(decl.identifier.clone());
        values.insert(decl.identifier.clone(), value);
    }

    Ok(CollectedVars { values, prompted })
}

/// Prompt for a required placeholder (no default).
fn prompt_required(name: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();

    Input::<String>::with_theme(&theme)
        .with_prompt(name)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Prompt for a placeholder with a default value.
fn prompt_with_default(name: &str, default: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();

    Input::<String>::with_theme(&theme)
        .with_prompt(name)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse a `--var` argument.
///
/// Expected format: `key=value`, where key is a placeholder identifier.
pub fn parse_var(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found '{arg}'"))?;
    let key = key.trim();
    if !is_identifier(key) {
        return Err(format!("'{key}' is not a valid placeholder name"));
    }
    Ok((key.to_string(), value.to_string()))
}
