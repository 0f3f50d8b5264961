use scriptpad_core::templates::discovery::discover_templates;
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
fn discovers_only_script_templates() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("tpl");

    write(&root.join("slurm_job.sh"), "#!/bin/bash");
    write(&root.join("align.bash"), "#!/bin/bash");
    write(&root.join("nextflow.sh.j2"), "#!/bin/bash");
    write(&root.join(".hidden.sh"), "nope");
    write(&root.join("README.md"), "nope");
    write(&root.join("nested").join("deep.sh"), "nope");

    let got = discover_templates(&root).expect("discover ok");
    let names: Vec<String> = got.into_iter().map(|t| t.name).collect();

    assert_eq!(names, vec!["align.bash", "nextflow.sh.j2", "slurm_job.sh"]);
}

#[test]
fn missing_directory_is_empty() {
    let tmp = tempdir().unwrap();
    let got = discover_templates(&tmp.path().join("absent")).expect("discover ok");
    assert!(got.is_empty());
}

#[test]
fn directory_named_like_template_is_skipped() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("tpl");
    fs::create_dir_all(root.join("dir.sh")).unwrap();
    write(&root.join("real.sh"), "x");

    let got = discover_templates(&root).expect("discover ok");
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].name, "real.sh");
}
