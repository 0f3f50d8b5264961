//! Render a template and write the result under an allowed root.

use crate::prompt::{collect_values, PromptOptions};
use crate::SaveArgs;
use scriptpad_core::roots::AllowedRoots;
use scriptpad_core::templates::RenderContext;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &SaveArgs) {
    let rc = super::load_config("save", config, profile);
    let template = super::load_template("save", &rc, &args.template);

    let outcome = template.scan();
    super::print_warnings(&outcome.warning_messages());

    let provided: RenderContext = args.vars.iter().cloned().collect();
    let options = PromptOptions { batch_mode: args.batch };
    let collected = match collect_values(&outcome.placeholders, &provided, &options) {
        Ok(c) => c,
        Err(e) => super::fail("save", e),
    };
    if !collected.prompted.is_empty() {
        tracing::debug!("prompted for: {}", collected.prompted.join(", "));
    }

    let result = scriptpad_core::templates::render_scanned(
        &template.content,
        &outcome,
        &collected.values,
    );

    if !result.is_complete() && !args.allow_unresolved {
        let names: Vec<&str> = result.unresolved.iter().map(String::as_str).collect();
        super::fail(
            "save",
            format!(
                "unresolved placeholders: {}\n  Hint: use --var NAME=\"...\" or --allow-unresolved",
                names.join(", ")
            ),
        );
    }

    let roots = AllowedRoots::resolve(&rc);
    match roots.save(&args.dir, &args.name, &result.text) {
        Ok(path) => {
            println!("OK   spad save");
            println!("template: {}", template.name);
            println!("path: {}", path.display());
            if !result.used_defaults.is_empty() {
                let names: Vec<&str> = result.used_defaults.iter().map(String::as_str).collect();
                println!("defaults: {}", names.join(", "));
            }
            for name in &result.unresolved {
                println!("unresolved: {name}");
            }
        }
        Err(e) => super::fail("save", e),
    }
}
