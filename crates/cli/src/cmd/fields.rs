//! Show the placeholders a template expects.

use crate::FieldsArgs;
use scriptpad_core::templates::FieldInfo;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Serialize)]
struct FieldsOutput {
    fields: Vec<FieldInfo>,
    warnings: Vec<String>,
}

/// Row for the fields table.
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Required")]
    required: String,
}

impl From<&FieldInfo> for FieldRow {
    fn from(f: &FieldInfo) -> Self {
        Self {
            name: f.name.clone(),
            default: f.default.clone().unwrap_or_else(|| "-".to_string()),
            required: if f.required { "yes" } else { "no" }.to_string(),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &FieldsArgs) {
    let rc = super::load_config("fields", config, profile);
    let template = super::load_template("fields", &rc, &args.template);

    let outcome = template.scan();
    let output = FieldsOutput {
        fields: outcome.placeholders.fields(),
        warnings: outcome.warning_messages(),
    };

    if args.json {
        super::print_json(&output);
        return;
    }

    super::print_warnings(&output.warnings);
    if output.fields.is_empty() {
        println!("(no placeholders in {})", template.name);
        return;
    }

    let rows: Vec<FieldRow> = output.fields.iter().map(FieldRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("\nTotal: {} placeholders", rows.len());
}
