use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::scanner::{ScanOutcome, ScanWarning, scan};

/// User-supplied values keyed by placeholder identifier.
pub type RenderContext = HashMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    pub text: String,
    /// Placeholders with no usable value and no default; rendered as empty text.
    pub unresolved: BTreeSet<String>,
    /// Placeholders that fell back to their declared default.
    pub used_defaults: BTreeSet<String>,
    /// Diagnostics from the scan of the template.
    pub warnings: Vec<ScanWarning>,
}

/// The rendered text and unresolved names, as shown in a live preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub rendered_text: String,
    pub unresolved: Vec<String>,
}

impl RenderResult {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    #[must_use]
    pub fn preview(&self) -> Preview {
        Preview {
            rendered_text: self.text.clone(),
            unresolved: self.unresolved.iter().cloned().collect(),
        }
    }
}

/// Scan `template` and substitute every placeholder occurrence.
///
/// Each occurrence becomes, in order of preference:
/// - the context value, if present and not blank
/// - the declared default
/// - an empty string (and the identifier is reported as unresolved)
///
/// Text outside placeholder spans is copied unchanged.
pub fn render(template: &str, ctx: &RenderContext) -> RenderResult {
    let outcome = scan(template);
    render_scanned(template, &outcome, ctx)
}

/// Like [`render`], reusing a scan of the same `template` text.
pub fn render_scanned(
    template: &str,
    outcome: &ScanOutcome,
    ctx: &RenderContext,
) -> RenderResult {
    let set = &outcome.placeholders;
    let mut result = RenderResult {
        text: String::with_capacity(template.len()),
        warnings: outcome.warnings.clone(),
        ..RenderResult::default()
    };

    let mut cursor = 0;
    for occ in set.occurrences() {
        let (start, end) = occ.span;
        result.text.push_str(&template[cursor..start]);
        cursor = end;

        if let Some(value) = ctx.get(&occ.identifier).filter(|v| !v.trim().is_empty()) {
            result.text.push_str(value);
            continue;
        }

        match set.get(&occ.identifier).and_then(|d| d.default_expression.as_deref()) {
            Some(default) => {
                result.text.push_str(default);
                result.used_defaults.insert(occ.identifier.clone());
            }
            None => {
                result.unresolved.insert(occ.identifier.clone());
            }
        }
    }
    result.text.push_str(&template[cursor..]);

    tracing::debug!(
        occurrences = set.occurrences().len(),
        unresolved = result.unresolved.len(),
        used_defaults = result.used_defaults.len(),
        "rendered template"
    );

    result
}
