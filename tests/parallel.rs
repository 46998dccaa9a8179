//! Tests for parallel CLI processing of multiple files.

use std::{fs::File, io::Write};

use tempfile::tempdir;

use prelude::*;

#[rstest]
fn test_cli_parallel_empty_file_list() {
    let output = run_cli_with_args(&[]);
    assert!(output.status.success());
    // An empty document still gains a bare TOC block.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<!-- vscode-markdown-toc -->\n"));
    assert!(stdout.ends_with("<!-- /vscode-markdown-toc -->\n\n"));
}

#[rstest]
fn test_cli_parallel_multiple_files() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut files = Vec::new();
    let mut expected = String::new();
    for i in 0..4 {
        let path = dir.path().join(format!("file{i}.md"));
        let doc = vec![format!("## Section {i}"), format!("### Detail {i}")];
        let mut f = File::create(&path).expect("failed to create temporary file");
        for line in &doc {
            writeln!(f, "{line}").expect("failed to write line");
        }
        f.flush().expect("failed to flush file");
        drop(f);
        expected.push_str(&mdtocsync::refresh_lines(&doc).join("\n"));
        expected.push('\n');
        files.push(path);
    }

    let mut cmd = Command::cargo_bin("mdtocsync").expect("failed to create command");
    for path in &files {
        cmd.arg(path);
    }
    let output = cmd.output().expect("failed to run command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[rstest]
fn test_cli_parallel_missing_file_error() {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.md");
    let doc = vec!["## Alpha".to_string(), "### Beta".to_string()];
    let mut f = File::create(&good).expect("failed to create file");
    for line in &doc {
        writeln!(f, "{line}").expect("failed to write line");
    }
    f.flush().expect("failed to flush file");
    drop(f);
    let expected = mdtocsync::refresh_lines(&doc).join("\n") + "\n";
    let missing = dir.path().join("missing.md");

    let output = Command::cargo_bin("mdtocsync")
        .expect("failed to create command")
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.md"));
}

#[rstest]
fn test_cli_parallel_missing_file_in_place(sample_doc: Vec<String>) {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.md");
    let mut f = File::create(&good).expect("failed to create file");
    for line in &sample_doc {
        writeln!(f, "{line}").expect("failed to write line");
    }
    f.flush().expect("failed to flush file");
    drop(f);
    let missing = dir.path().join("missing.md");

    let output = Command::cargo_bin("mdtocsync")
        .expect("failed to create command")
        .arg("--in-place")
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.md"));
}

#[fixture]
fn sample_doc() -> Vec<String> {
    lines_vec!["# Title", "## Alpha", "### Beta"]
}
