use scriptpad_core::templates::discovery::discover_templates;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, json: bool) {
    let rc = super::load_config("list-templates", config, profile);

    match discover_templates(&rc.templates_dir) {
        Ok(list) => {
            if json {
                super::print_json(&list);
                return;
            }
            if list.is_empty() {
                println!("(no templates found)");
                return;
            }
            for t in &list {
                println!("{}", t.name);
            }
            println!("-- {} templates --", list.len());
        }
        Err(e) => super::fail("list-templates", e),
    }
}
