use crate::common::command::{run_linediff_command, rust_source, workspace_dir};
use crate::common::file::write_versions;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_plain_diff_for_modified_file(
    workspace_dir: TempDir,
    rust_source: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let modified = rust_source.replace("world", "there");
    write_versions(workspace_dir.path(), &rust_source, &modified);

    let expected_output = r#"--- src/main.rs
+++ src/main.rs
@@ -1,5 +1,5 @@
 fn main() {
-    let name = "world";
+    let name = "there";
     println!("hello {name}");
 }
 
"#;
    let actual_output = run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--plain", "--label", "src/main.rs"],
    )
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn label_defaults_to_modified_path(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_versions(workspace_dir.path(), "a\nb", "a\nc");

    let actual_output = run_linediff_command(
        workspace_dir.path(),
        &["original.txt", "modified.txt", "--no-pager"],
    )
    .assert()
    .success();
    let stdout = String::from_utf8(actual_output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(
        stdout,
        "--- modified.txt\n+++ modified.txt\n@@ -1,2 +1,2 @@\n a\n-b\n+c\n"
    );

    Ok(())
}
