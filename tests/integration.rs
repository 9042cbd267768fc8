// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use stackgen::{api::STATUS_LINES, blueprint, templates};
use std::{fs, path::Path};

fn stackgen_in(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("stackgen").unwrap();
    cmd.current_dir(root);
    cmd
}

#[test]
fn scaffolds_into_empty_directory() {
    let root = tempfile::tempdir().unwrap();

    stackgen_in(root.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", STATUS_LINES.join("\n"))));

    let layout = blueprint::fullstack();

    for dir in &layout.directories {
        assert!(
            root.path().join(&dir.path).is_dir(),
            "missing directory: {}",
            dir.path.display()
        );
    }
    for file in &layout.files {
        let written = fs::read_to_string(root.path().join(&file.path)).unwrap();
        assert_eq!(written, file.content, "content mismatch: {}", file.path.display());
    }

    // the placeholder directories stay empty
    for empty in ["frontend", "backend/app/api", "backend/tests"] {
        let entries = fs::read_dir(root.path().join(empty)).unwrap().count();
        assert_eq!(entries, 0, "{empty} should be empty");
    }
}

#[test]
fn second_run_overwrites_with_identical_content() {
    let root = tempfile::tempdir().unwrap();
    let readme = root.path().join("README.md");

    stackgen_in(root.path()).assert().success();
    fs::write(&readme, "edited by hand").unwrap();
    stackgen_in(root.path()).assert().success();

    assert_eq!(fs::read_to_string(&readme).unwrap(), templates::README_MD);
}

#[test]
fn file_in_place_of_frontend_aborts_before_any_write() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("frontend"), "").unwrap();

    stackgen_in(root.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("frontend"));

    for file in blueprint::fullstack().files {
        assert!(
            !root.path().join(&file.path).exists(),
            "unexpected write: {}",
            file.path.display()
        );
    }
}

#[test]
fn backend_entry_point_is_a_fastapi_hello_world() {
    let root = tempfile::tempdir().unwrap();

    stackgen_in(root.path()).assert().success();

    let main_py = fs::read_to_string(root.path().join("backend/app/main.py")).unwrap();
    assert!(main_py.starts_with("\nfrom fastapi import FastAPI\n"));
    assert!(main_py.contains("@app.get(\"/\")"));
    assert!(main_py.contains("return {\"Hello\": \"World\"}"));
}

#[test]
fn compose_declares_frontend_and_backend_only() {
    let root = tempfile::tempdir().unwrap();

    stackgen_in(root.path()).assert().success();

    let compose = fs::read_to_string(root.path().join("docker-compose.yml")).unwrap();

    let services: Vec<&str> = compose
        .lines()
        .skip_while(|line| *line != "services:")
        .skip(1)
        .filter(|line| line.starts_with("  ") && !line.starts_with("   "))
        .map(|line| line.trim().trim_end_matches(':'))
        .collect();
    assert_eq!(services, vec!["frontend", "backend"]);

    assert!(compose.contains("\"3000:3000\""));
    assert!(compose.contains("\"8000:8000\""));
}

#[test]
fn dry_run_writes_nothing() {
    let root = tempfile::tempdir().unwrap();

    stackgen_in(root.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("main.py"))
        .stdout(predicate::str::contains(STATUS_LINES[0]).not());

    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn library_scaffold_accepts_an_explicit_root() {
    let root = tempfile::tempdir().unwrap();
    let project = root.path().join("proj");

    stackgen::api::scaffold(&project).unwrap();

    assert_eq!(
        fs::read_to_string(project.join("Makefile")).unwrap(),
        templates::MAKEFILE
    );
    assert_eq!(
        fs::read_to_string(project.join(".env.example")).unwrap(),
        "\nFRONTEND_URL=http://localhost:3000\nBACKEND_URL=http://localhost:8000\n"
    );
}
