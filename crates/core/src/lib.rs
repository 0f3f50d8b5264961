#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Core of scriptpad: placeholder scanning and rendering for parameterized
//! shell script templates, plus the configuration and file handling around it.

pub mod config;
pub mod roots;
pub mod templates;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
