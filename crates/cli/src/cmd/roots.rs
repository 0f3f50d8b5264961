use scriptpad_core::roots::AllowedRoots;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, json: bool) {
    let rc = super::load_config("roots", config, profile);
    let roots = AllowedRoots::resolve(&rc);

    if json {
        super::print_json(&roots.list());
        return;
    }
    if roots.is_empty() {
        println!("(no roots configured)");
        return;
    }
    for root in roots.list() {
        println!("{:<10} {:<18} {}", root.id, root.label, root.path.display());
    }
}
