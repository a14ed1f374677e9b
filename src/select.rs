//! Folder/bucket selection.
//!
//! Lists the immediate subdirectories of the project root as candidate
//! bucket names and asks the user to pick one from a numbered menu. Parsing
//! a menu reply is a pure function over the folder list; the interactive
//! loop is generic over its reader and writer so it runs against buffers in
//! tests and stdin/stdout in production.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Directory names never offered as buckets, on top of hidden entries.
const CACHE_DIRS: &[&str] = &["__pycache__", "target"];

/// Immediate subdirectories of `root`, sorted, excluding hidden entries and
/// cache directories. Each eligible folder appears exactly once.
pub fn list_project_folders(root: &Path) -> io::Result<Vec<String>> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || CACHE_DIRS.contains(&name.as_str()) {
            continue;
        }
        folders.push(name);
    }
    folders.sort();
    Ok(folders)
}

/// Outcome of parsing one menu reply.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// A valid 1-based choice, converted to a 0-based index.
    Index(usize),
    Quit,
    Invalid,
}

/// Interpret a raw input line against a menu of `folder_count` entries.
pub fn parse_reply(line: &str, folder_count: usize) -> Reply {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Reply::Quit;
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=folder_count).contains(&n) => Reply::Index(n - 1),
        _ => Reply::Invalid,
    }
}

/// Present the numbered menu on `output` and read replies from `input` until
/// a valid choice or a quit. Returns `None` when the user quits, input ends,
/// or there is nothing to offer.
pub fn select_folder_from<R: BufRead, W: Write>(
    folders: &[String],
    input: R,
    output: &mut W,
) -> io::Result<Option<String>> {
    if folders.is_empty() {
        writeln!(output, "No folders found under the project root")?;
        return Ok(None);
    }

    writeln!(output, "\nAvailable project folders (bucket names):")?;
    for (i, folder) in folders.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, folder)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "\nSelect folder/bucket (1-{}, q to quit): ", folders.len())?;
        output.flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match parse_reply(&line?, folders.len()) {
            Reply::Index(i) => return Ok(Some(folders[i].clone())),
            Reply::Quit => return Ok(None),
            Reply::Invalid => {
                writeln!(
                    output,
                    "Enter a number between 1 and {}, or 'q' to quit",
                    folders.len()
                )?;
            }
        }
    }
}

/// Interactive entry point: list folders under `root` and prompt on the
/// terminal.
pub fn select_folder(root: &Path) -> io::Result<Option<String>> {
    let folders = list_project_folders(root)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    select_folder_from(&folders, stdin.lock(), &mut stdout)
}

/// Ask a yes/no question; only an explicit `y`/`Y` counts as yes.
pub fn confirm_from<R: BufRead, W: Write>(
    prompt: &str,
    mut input: R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "{prompt} (y/N): ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

pub fn confirm(prompt: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_from(prompt, stdin.lock(), &mut stdout)
}
