//! Preview a rendered template on stdout.

use crate::RenderArgs;
use scriptpad_core::templates::RenderContext;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RenderArgs) {
    let rc = super::load_config("render", config, profile);
    let template = super::load_template("render", &rc, &args.template);

    let ctx: RenderContext = args.vars.iter().cloned().collect();
    let result = template.render(&ctx);
    tracing::info!(
        "rendered {} ({} bytes, {} unresolved)",
        template.name,
        result.text.len(),
        result.unresolved.len()
    );

    if args.json {
        super::print_json(&result);
        return;
    }

    let messages: Vec<String> = result.warnings.iter().map(ToString::to_string).collect();
    super::print_warnings(&messages);
    for name in &result.unresolved {
        eprintln!("unresolved: {name}");
    }

    print!("{}", result.text);
}
