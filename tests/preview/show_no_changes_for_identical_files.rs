use crate::common::command::{run_linediff_command, rust_source, workspace_dir};
use crate::common::file::write_versions;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::plain(&["--plain"])]
#[case::console(&["--no-pager"])]
fn show_no_changes_for_identical_files(
    workspace_dir: TempDir,
    rust_source: String,
    #[case] flags: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), &rust_source, &rust_source);

    let mut args = vec!["original.txt", "modified.txt", "--label", "src/main.rs"];
    args.extend_from_slice(flags);

    run_linediff_command(workspace_dir.path(), &args)
        .assert()
        .success()
        .stdout("No changes would be made to src/main.rs\n");

    Ok(())
}
