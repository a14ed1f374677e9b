use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn bucket_sync() -> Command {
    let mut cmd = Command::cargo_bin("bucket-sync").expect("binary exists");
    // Keep the AWS SDK from probing instance metadata in CI.
    cmd.env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_REGION", "us-east-1");
    cmd
}

#[test]
#[serial]
fn download_with_no_project_folders_exits_1() {
    let root = tempdir().expect("temp dir");

    bucket_sync()
        .arg("download")
        .arg("--project-root")
        .arg(root.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("No folders found")
                .and(predicate::str::contains("No folder selected")),
        );
}

#[test]
#[serial]
fn quitting_the_menu_exits_1() {
    let root = tempdir().expect("temp dir");
    fs::create_dir(root.path().join("proj")).unwrap();

    bucket_sync()
        .arg("upload")
        .arg("--project-root")
        .arg(root.path())
        .write_stdin("q\n")
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("1. proj").and(predicate::str::contains("No folder selected")),
        );
}

#[test]
#[serial]
fn uploading_an_empty_folder_transfers_nothing_and_exits_0() {
    let root = tempdir().expect("temp dir");
    fs::create_dir(root.path().join("proj")).unwrap();

    bucket_sync()
        .arg("upload")
        .arg("--project-root")
        .arg(root.path())
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to upload."));
}

#[test]
#[serial]
fn changed_files_mode_outside_a_repository_announces_the_fallback() {
    let root = tempdir().expect("temp dir");
    fs::create_dir(root.path().join("proj")).unwrap();

    bucket_sync()
        .arg("upload")
        .arg("--project-root")
        .arg(root.path())
        .write_stdin("1\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Uploading all files")
                .and(predicate::str::contains("No files to upload.")),
        );
}
