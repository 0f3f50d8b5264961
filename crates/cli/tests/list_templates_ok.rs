use assert_cmd::prelude::*;
use predicates::prelude::*; // needed for `.not()`
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn list_templates_reports_script_files_only() {
    let tmp = tempdir().unwrap();

    // XDG-style config location, found without --config
    let xdg = tmp.path().join("xdg");
    let cfg_path = xdg.join("scriptpad").join("config.toml");

    let tpl_root = tmp.path().join("script_templates");
    write(&tpl_root.join("slurm_job.sh"), "#!/bin/bash");
    write(&tpl_root.join("nextflow.sh.j2"), "#!/bin/bash");
    write(&tpl_root.join("notes.txt"), "nope");
    write(&tpl_root.join(".draft.sh"), "nope");

    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
templates_dir = "{tpl}"
"#,
        tpl = tpl_root.display(),
    );
    write(&cfg_path, &toml);

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("spad"));
    cmd.env("XDG_CONFIG_HOME", &xdg);
    cmd.env("NO_COLOR", "1");
    cmd.arg("list-templates");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("slurm_job.sh"))
        .stdout(predicates::str::contains("nextflow.sh.j2"))
        .stdout(predicates::str::contains("-- 2 templates --"))
        .stdout(predicates::str::contains("notes").not())
        .stdout(predicates::str::contains("draft").not());
}

#[test]
fn list_templates_json() {
    let tmp = tempdir().unwrap();
    let tpl_root = tmp.path().join("tpl");
    write(&tpl_root.join("a.sh"), "");

    let cfg_path = tmp.path().join("config.toml");
    let toml = format!(
        "version = 1\n[profiles.default]\ntemplates_dir = \"{}\"\n",
        tpl_root.display()
    );
    write(&cfg_path, &toml);

    let out = std::process::Command::new(assert_cmd::cargo::cargo_bin!("spad"))
        .args(["--config", cfg_path.to_str().unwrap(), "list-templates", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json[0]["name"], "a.sh");
}
