use scriptpad_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
templates_dir = "/srv/script_templates"
extra_roots   = ["/scratch/me", "/project/shared"]
include_home  = false

[logging]
level      = "warn"
file_level = "debug"
file       = "/tmp/spad.log"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.templates_dir, PathBuf::from("/srv/script_templates"));
    assert_eq!(
        rc.extra_roots,
        vec![PathBuf::from("/scratch/me"), PathBuf::from("/project/shared")]
    );
    assert!(!rc.include_home);
    assert_eq!(rc.logging.level, "warn");
    assert_eq!(rc.logging.file_level.as_deref(), Some("debug"));
    assert_eq!(rc.logging.file, Some(PathBuf::from("/tmp/spad.log")));
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("scriptpad/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
templates_dir = "/tmp/def/tpl"

[profiles.cluster]
templates_dir = "/tmp/cluster/tpl"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("cluster")).expect("should load");
    assert_eq!(rc.active_profile, "cluster");
    assert_eq!(rc.templates_dir, PathBuf::from("/tmp/cluster/tpl"));
}

#[test]
fn profile_defaults_to_default_name() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n[profiles.default]\ntemplates_dir = \"/t\"\n");

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
}
