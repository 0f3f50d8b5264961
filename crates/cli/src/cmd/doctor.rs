use scriptpad_core::config::loader::default_config_path;
use scriptpad_core::roots::AllowedRoots;
use scriptpad_core::templates::discovery::discover_templates;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = super::load_config("doctor", config, profile);
    tracing::info!("running doctor for profile '{}'", rc.active_profile);

    let roots = AllowedRoots::resolve(&rc);

    println!("OK   spad doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("templates_dir: {}", rc.templates_dir.display());
    match discover_templates(&rc.templates_dir) {
        Ok(list) => println!("templates: {}", list.len()),
        Err(e) => println!("templates: error: {e}"),
    }
    if roots.is_empty() {
        println!("roots: (none, saving is disabled)");
    }
    for root in roots.list() {
        println!("root.{}: {}", root.id, root.path.display());
    }
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }
}
