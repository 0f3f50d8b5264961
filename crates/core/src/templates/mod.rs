//! Script templates: discovery, loading, placeholder scanning and rendering.

pub mod discovery;
pub mod engine;
pub mod repository;
pub mod scanner;

pub use engine::{Preview, RenderContext, RenderResult, render, render_scanned};
pub use scanner::{
    FieldInfo, PlaceholderDeclaration, PlaceholderSet, ScanOutcome, ScanWarning,
    ScanWarningKind, scan,
};
