use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::write_versions;
use assert_fs::TempDir;
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

#[rstest]
fn show_colored_diff_when_forced(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), "keep\nold", "keep\nnew");

    let expected_output = "\u{1b}[1m--- modified.txt\u{1b}[0m\n\
        \u{1b}[1m+++ modified.txt\u{1b}[0m\n\
        \u{1b}[36m@@ -1,2 +1,2 @@\u{1b}[0m\n \
        keep\n\
        \u{1b}[31m-old\u{1b}[0m\n\
        \u{1b}[32m+new\u{1b}[0m\n";
    let actual_output = run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--color", "always", "--no-pager"],
    )
    .assert()
    .success();
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, expected_output);

    Ok(())
}

#[rstest]
fn show_colored_notice_for_identical_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), "keep\nsame", "keep\nsame");

    run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--color", "always", "--no-pager"],
    )
    .assert()
    .success()
    .stdout("\u{1b}[33mNo changes would be made to modified.txt\u{1b}[0m\n");

    Ok(())
}

#[rstest]
fn never_color_prints_plain_text(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), "keep\nold", "keep\nnew");

    run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--color", "never", "--no-pager"],
    )
    .env("CLICOLOR_FORCE", "1")
    .assert()
    .success()
    .stdout(predicate::str::contains("\u{1b}[").not());

    Ok(())
}
