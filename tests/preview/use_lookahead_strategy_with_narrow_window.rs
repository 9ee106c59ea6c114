use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::write_versions;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn use_lookahead_strategy_with_narrow_window(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), "P\nQ", "N1\nN2\nN3\nP\nQ");

    let alignment = run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--plain"],
    )
    .assert()
    .success();
    let alignment = String::from_utf8(alignment.get_output().stdout.clone())?;

    let lookahead = run_linediff_command(
        workspace_dir.path(),
        &[
            "original.txt",
            "modified.txt",
            "--plain",
            "--strategy",
            "lookahead",
            "--lookahead",
            "2",
        ],
    )
    .assert()
    .success();
    let lookahead = String::from_utf8(lookahead.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(
        alignment,
        "--- modified.txt\n+++ modified.txt\n@@ -1,2 +1,5 @@\n+N1\n+N2\n+N3\n P\n Q\n"
    );
    pretty_assertions::assert_eq!(
        lookahead,
        "--- modified.txt\n+++ modified.txt\n@@ -1,2 +1,5 @@\n-P\n-Q\n+N1\n+N2\n+N3\n+P\n+Q\n"
    );

    Ok(())
}
