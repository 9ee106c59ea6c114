use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::write_versions;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_stat_summary(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), "a\nb\nc\nd", "a\nx\ny\nc");

    run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--plain", "--stat"],
    )
    .assert()
    .success()
    .stdout(predicate::str::ends_with(
        " 2 insertions(+), 2 deletions(-)\n",
    ));

    Ok(())
}
