//! Placeholder scanning for script templates.
//!
//! Recognises exactly three forms:
//!
//! ```text
//! {{ identifier }}
//! {{ identifier | default('literal value') }}
//! {{ identifier | default("literal value") }}
//! ```
//!
//! Anything else between `{{` and `}}` is reported as a [`ScanWarning`] and left
//! untouched in rendered output. Delimiters do not nest: an expression runs from
//! a `{{` to the next `}}`, even if another `{{` appears in between.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Byte range `(start, end)` into the template text, end exclusive.
pub type Span = (usize, usize);

/// A distinct placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderDeclaration {
    pub identifier: String,
    /// Literal fallback from the first occurrence, `None` if the value is required.
    pub default_expression: Option<String>,
    /// Span of the first occurrence.
    pub raw_span: Span,
}

/// One substitutable occurrence of a declared placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub identifier: String,
    pub span: Span,
}

/// Declarations ordered by first occurrence, plus every occurrence in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaceholderSet {
    declarations: Vec<PlaceholderDeclaration>,
    occurrences: Vec<Occurrence>,
}

/// Form field description derived from a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: String,
    pub default: Option<String>,
    pub required: bool,
}

impl PlaceholderSet {
    pub fn declarations(&self) -> &[PlaceholderDeclaration] {
        &self.declarations
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn get(&self, identifier: &str) -> Option<&PlaceholderDeclaration> {
        self.declarations.iter().find(|d| d.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Fields for an input form, in first-occurrence order.
    ///
    /// A field is required when its placeholder declares no default.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldInfo> {
        self.declarations
            .iter()
            .map(|d| FieldInfo {
                name: d.identifier.clone(),
                default: d.default_expression.clone(),
                required: d.default_expression.is_none(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanWarningKind {
    /// `{{` with no closing `}}` before end of text.
    MalformedExpression,
    InvalidIdentifier,
    /// Text after `|` that is not `default('...')` or `default("...")`.
    InvalidDefault,
    /// Later occurrence declares a default different from the first one.
    ConflictingDefault,
}

impl ScanWarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedExpression => "malformed-expression",
            Self::InvalidIdentifier => "invalid-identifier",
            Self::InvalidDefault => "invalid-default",
            Self::ConflictingDefault => "conflicting-default",
        }
    }
}

impl fmt::Display for ScanWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal diagnostic produced while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub kind: ScanWarningKind,
    pub message: String,
    pub span: Span,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at bytes {}..{}: {}", self.kind, self.span.0, self.span.1, self.message)
    }
}

/// Everything a scan produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub placeholders: PlaceholderSet,
    pub warnings: Vec<ScanWarning>,
}

impl ScanOutcome {
    pub fn has_kind(&self, kind: ScanWarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }

    /// Human-readable warnings, one line each.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Scan template text for placeholders.
///
/// Never fails: every anomaly becomes a [`ScanWarning`] and the offending text
/// is left for the renderer to copy verbatim.
pub fn scan(text: &str) -> ScanOutcome {
    let mut out = ScanOutcome::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut pos = 0;

    while let Some(rel_open) = text[pos..].find(OPEN) {
        let open = pos + rel_open;
        let body_start = open + OPEN.len();

        let Some(rel_close) = text[body_start..].find(CLOSE) else {
            out.warnings.push(ScanWarning {
                kind: ScanWarningKind::MalformedExpression,
                message: "unterminated placeholder, missing closing '}}'".to_string(),
                span: (open, text.len()),
            });
            break;
        };

        let close = body_start + rel_close;
        let span = (open, close + CLOSE.len());
        pos = span.1;

        match parse_expression(&text[body_start..close]) {
            Ok((identifier, default)) => {
                record(&mut out, &mut index, identifier, default, span);
            }
            Err((kind, message)) => {
                out.warnings.push(ScanWarning { kind, message, span });
            }
        }
    }

    out
}

fn record(
    out: &mut ScanOutcome,
    index: &mut HashMap<String, usize>,
    identifier: &str,
    default: Option<String>,
    span: Span,
) {
    match index.get(identifier) {
        Some(&i) => {
            let first = &out.placeholders.declarations[i];
            if default.is_some() && default != first.default_expression {
                let message = match &first.default_expression {
                    Some(kept) => format!(
                        "'{identifier}' already declared with default '{kept}', ignoring '{}'",
                        default.as_deref().unwrap_or_default()
                    ),
                    None => format!(
                        "'{identifier}' first declared without a default, ignoring '{}'",
                        default.as_deref().unwrap_or_default()
                    ),
                };
                out.warnings.push(ScanWarning {
                    kind: ScanWarningKind::ConflictingDefault,
                    message,
                    span,
                });
            }
        }
        None => {
            index.insert(identifier.to_string(), out.placeholders.declarations.len());
            out.placeholders.declarations.push(PlaceholderDeclaration {
                identifier: identifier.to_string(),
                default_expression: default,
                raw_span: span,
            });
        }
    }

    out.placeholders
        .occurrences
        .push(Occurrence { identifier: identifier.to_string(), span });
}

type ExprError = (ScanWarningKind, String);

/// Parse the text between the delimiters into `(identifier, default)`.
fn parse_expression(body: &str) -> Result<(&str, Option<String>), ExprError> {
    let (name, clause) = match body.split_once('|') {
        Some((name, clause)) => (name.trim(), Some(clause.trim())),
        None => (body.trim(), None),
    };

    if !is_identifier(name) {
        return Err((
            ScanWarningKind::InvalidIdentifier,
            format!("'{name}' is not a valid identifier"),
        ));
    }

    match clause {
        None => Ok((name, None)),
        Some(clause) => match parse_default_clause(clause) {
            Some(literal) => Ok((name, Some(literal))),
            None => Err((
                ScanWarningKind::InvalidDefault,
                format!("expected default('...') or default(\"...\") after '|', found '{clause}'"),
            )),
        },
    }
}

pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Parse `default('...')` / `default("...")`, returning the unescaped literal.
fn parse_default_clause(clause: &str) -> Option<String> {
    let args = clause.strip_prefix("default")?.trim_start().strip_prefix('(')?;
    let args = args.trim_start();

    let mut chars = args.char_indices();
    let quote = match chars.next()? {
        (_, q @ ('\'' | '"')) => q,
        _ => return None,
    };

    let mut literal = String::new();
    let mut end = None;
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, n)) if n == quote || n == '\\' => literal.push(n),
                Some((_, n)) => {
                    literal.push('\\');
                    literal.push(n);
                }
                None => return None,
            }
        } else if c == quote {
            end = Some(i + c.len_utf8());
            break;
        } else {
            literal.push(c);
        }
    }

    let rest = args[end?..].trim_start().strip_prefix(')')?;
    rest.trim().is_empty().then_some(literal)
}
