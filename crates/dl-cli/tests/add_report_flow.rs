//! End-to-end tests driving the compiled `dl` binary: add an item, rewrite
//! the changelog, render the time report.

use std::process::Command;

use tempfile::TempDir;

fn dl_binary() -> String {
    env!("CARGO_BIN_EXE_dl").to_string()
}

fn run_dl(args: &[&std::ffi::OsStr]) -> std::process::Output {
    Command::new(dl_binary())
        .args(args)
        .output()
        .expect("failed to run dl")
}

#[test]
fn add_creates_changelog_with_todays_entry_on_top() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");

    let output = run_dl(&[
        "-f".as_ref(),
        path.as_os_str(),
        "-a".as_ref(),
        "did a thing".as_ref(),
    ]);
    assert!(
        output.status.success(),
        "dl -a should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# "), "generated entry header on top");
    assert!(text.contains(")* did a thing"));
}

#[test]
fn add_is_the_default_mode() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");

    let output = run_dl(&["-f".as_ref(), path.as_os_str(), "no flags given".as_ref()]);
    assert!(output.status.success());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains(")* no flags given"));
}

#[test]
fn single_item_report_prints_header_only() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");

    let output = run_dl(&[
        "-f".as_ref(),
        path.as_os_str(),
        "-a".as_ref(),
        "did a thing".as_ref(),
    ]);
    assert!(output.status.success());

    let output = run_dl(&["-f".as_ref(), path.as_os_str(), "-c".as_ref()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# "), "report shows the entry header");
    assert!(
        !stdout.contains("[Total]"),
        "one item bounds no interval, so no rows: {stdout}"
    );
}

#[test]
fn report_of_prebuilt_changelog_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");
    std::fs::write(
        &path,
        "# 2024-01-02 ############################################################\n\n\
         *\t*(11:30)* A\n\
         *\t*(10:00)* B\n\
         *\t*(09:00)* A\n\n\
         # 2024-01-01 ############################################################\n\n\
         *\t*(09:05)* B\n\
         *\t*(09:00)* A\n\n\n",
    )
    .unwrap();

    let output = run_dl(&["-f".as_ref(), path.as_os_str(), "-c".as_ref()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = "# 2024-01-02 ############################################################\n\n\
         B: 1.50h (90m)\n\
         A: 1.00h (60m)\n\
         ----------------------------------------\n\
         [Total]: 2.50h (150m)\n\n\
         # 2024-01-01 ############################################################\n\n\
         A: 0.25h (5m)\n\
         ----------------------------------------\n\
         [Total]: 0.25h (5m)\n\n";
    assert_eq!(stdout, expected);
}

#[test]
fn report_on_missing_file_succeeds_with_empty_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no-such-changelog.md");

    let output = run_dl(&["-f".as_ref(), path.as_os_str(), "-c".as_ref()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!path.exists(), "report must not create the file");
}

#[test]
fn report_does_not_modify_the_changelog() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");
    let original = "# 2024-01-02 ############################################################\n\n\
         *\t*(10:00)* B\n\
         *\t*(09:00)* A\n\n\n";
    std::fs::write(&path, original).unwrap();

    let output = run_dl(&["-f".as_ref(), path.as_os_str(), "-c".as_ref()]);
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn json_report_is_valid_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");
    std::fs::write(
        &path,
        "# 2024-01-02 ############################################################\n\n\
         *\t*(10:00)* B\n\
         *\t*(09:00)* A\n\n\n",
    )
    .unwrap();

    let output = run_dl(&[
        "-f".as_ref(),
        path.as_os_str(),
        "-c".as_ref(),
        "--json".as_ref(),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["entries"][0]["date"], "2024-01-02");
    assert_eq!(value["entries"][0]["rows"][0]["label"], "A");
    assert_eq!(value["entries"][0]["rows"][0]["minutes"], 60);
}

#[test]
fn rewrite_preserves_foreign_text_verbatim() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("changelog.md");
    std::fs::write(
        &path,
        "free-form notes, not a changelog at all\nstill not one\n",
    )
    .unwrap();

    let output = run_dl(&["-f".as_ref(), path.as_os_str(), "-a".as_ref(), "x".as_ref()]);
    assert!(output.status.success());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("free-form notes, not a changelog at all\nstill not one\n"));
    assert!(text.contains(")* x"));
}
