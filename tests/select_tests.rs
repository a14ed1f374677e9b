use std::fs;
use std::io::Cursor;

use tempfile::tempdir;

use bucket_sync::select::{
    confirm_from, list_project_folders, parse_reply, select_folder_from, Reply,
};

#[test]
fn lists_each_folder_once_sorted_excluding_hidden_and_cache() {
    let root = tempdir().expect("temp dir");
    for name in ["zeta", "alpha", ".hidden", "__pycache__", "target"] {
        fs::create_dir(root.path().join(name)).unwrap();
    }
    fs::write(root.path().join("notes.txt"), b"not a folder").unwrap();

    let folders = list_project_folders(root.path()).expect("listing succeeds");

    assert_eq!(folders, vec!["alpha".to_string(), "zeta".to_string()]);
}

#[test]
fn listing_empty_root_yields_no_folders() {
    let root = tempdir().expect("temp dir");
    let folders = list_project_folders(root.path()).expect("listing succeeds");
    assert!(folders.is_empty());
}

#[test]
fn parse_reply_accepts_in_range_numbers_and_quit() {
    assert_eq!(parse_reply("1", 3), Reply::Index(0));
    assert_eq!(parse_reply(" 3 ", 3), Reply::Index(2));
    assert_eq!(parse_reply("q", 3), Reply::Quit);
    assert_eq!(parse_reply("Q", 3), Reply::Quit);
    assert_eq!(parse_reply("0", 3), Reply::Invalid);
    assert_eq!(parse_reply("4", 3), Reply::Invalid);
    assert_eq!(parse_reply("two", 3), Reply::Invalid);
    assert_eq!(parse_reply("", 3), Reply::Invalid);
}

#[test]
fn menu_lists_folders_and_returns_choice() {
    let folders = vec!["alpha".to_string(), "beta".to_string()];
    let mut output = Vec::new();

    let chosen = select_folder_from(&folders, Cursor::new("2\n"), &mut output)
        .expect("selection succeeds");

    assert_eq!(chosen.as_deref(), Some("beta"));
    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("1. alpha"));
    assert!(rendered.contains("2. beta"));
    // Each folder is listed exactly once.
    assert_eq!(rendered.matches("alpha").count(), 1);
    assert_eq!(rendered.matches("beta").count(), 1);
}

#[test]
fn menu_loops_on_invalid_input_until_valid_choice() {
    let folders = vec!["alpha".to_string(), "beta".to_string()];
    let mut output = Vec::new();

    let chosen = select_folder_from(&folders, Cursor::new("0\nnope\n9\n1\n"), &mut output)
        .expect("selection succeeds");

    assert_eq!(chosen.as_deref(), Some("alpha"));
    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("Enter a number between 1 and 2"));
}

#[test]
fn menu_returns_none_on_quit_and_on_end_of_input() {
    let folders = vec!["alpha".to_string()];
    let mut output = Vec::new();
    let chosen =
        select_folder_from(&folders, Cursor::new("q\n"), &mut output).expect("selection succeeds");
    assert!(chosen.is_none());

    let mut output = Vec::new();
    let chosen =
        select_folder_from(&folders, Cursor::new(""), &mut output).expect("selection succeeds");
    assert!(chosen.is_none());
}

#[test]
fn menu_with_no_folders_reports_and_returns_none() {
    let mut output = Vec::new();
    let chosen =
        select_folder_from(&[], Cursor::new("1\n"), &mut output).expect("selection succeeds");
    assert!(chosen.is_none());
    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("No folders found"));
}

#[test]
fn confirm_accepts_only_explicit_yes() {
    for (reply, expected) in [("y\n", true), ("Y\n", true), ("n\n", false), ("\n", false)] {
        let mut output = Vec::new();
        let answer = confirm_from("Proceed?", Cursor::new(reply), &mut output)
            .expect("confirm succeeds");
        assert_eq!(answer, expected, "reply {reply:?}");
    }
}
