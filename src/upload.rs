//! Upload pipeline: determine the file set for a project folder and push
//! each file to the bucket of the same name, one at a time, in listing
//! order.
//!
//! Two modes select the file set:
//! - full: walk the whole folder tree,
//! - changed-files: ask the [`ChangeLister`] and keep only eligible regular
//!   files under the folder; if the lister fails, fall back to the full walk
//!   with a visible notice.
//!
//! Hidden files and script sources are never uploaded in either mode.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::changes::ChangeLister;
use crate::store::{ObjectStore, StoreError};

/// Script sources are tooling, not project content.
const SCRIPT_SUFFIX: &str = ".py";

/// Whether a file of this name may leave the machine.
pub fn eligible_file_name(name: &str) -> bool {
    !name.starts_with('.') && !name.ends_with(SCRIPT_SUFFIX)
}

/// Every eligible regular file under `folder`, at any depth, exactly once.
pub fn collect_all_files(folder: &Path) -> Vec<PathBuf> {
    WalkDir::new(folder)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| eligible_file_name(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Keep the lister's entries that are eligible regular files under `folder`,
/// returning their full paths. Entries are relative to the project root and
/// forward-slash separated, as version control reports them.
pub fn filter_changed_files(
    entries: &[String],
    project_root: &Path,
    folder: &str,
) -> Vec<PathBuf> {
    let prefix = format!("{folder}/");
    entries
        .iter()
        .filter(|entry| entry.starts_with(&prefix))
        .filter(|entry| entry.rsplit('/').next().is_some_and(eligible_file_name))
        .map(|entry| {
            entry
                .split('/')
                .fold(project_root.to_path_buf(), |path, part| path.join(part))
        })
        .filter(|path| path.is_file())
        .collect()
}

/// Remote key for `file`: its path relative to `folder`, forward-slash
/// separated regardless of the local path convention.
pub fn remote_key(folder: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(folder).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Content type guessed from the filename extension, defaulting to a generic
/// binary type.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Upload `folder` (relative to `project_root`) into the bucket of the same
/// name. Transfers run strictly sequentially; the first storage failure ends
/// the run.
pub async fn upload_folder<S, L>(
    store: &S,
    lister: &L,
    project_root: &Path,
    folder: &str,
    changed_only: bool,
) -> Result<(), StoreError>
where
    S: ObjectStore + ?Sized,
    L: ChangeLister + ?Sized,
{
    let folder_path = project_root.join(folder);

    let mut files = Vec::new();
    let mut walk_everything = !changed_only;
    if changed_only {
        match lister.changed_files() {
            Ok(entries) => {
                let selected = filter_changed_files(&entries, project_root, folder);
                if selected.is_empty() {
                    println!("No changed files detected by git.");
                    return Ok(());
                }
                println!("Git detected {} changed files:", selected.len());
                for file in &selected {
                    if let Ok(relative) = file.strip_prefix(&folder_path) {
                        println!("  {}", relative.display());
                    }
                }
                files = selected;
            }
            Err(e) => {
                warn!(error = %e, "change listing failed, falling back to full upload");
                println!("Git not available or not a repository. Uploading all files.");
                walk_everything = true;
            }
        }
    }
    if walk_everything {
        files = collect_all_files(&folder_path);
    }

    if files.is_empty() {
        println!("No files to upload.");
        return Ok(());
    }

    println!("\nUploading {} files...", files.len());
    for file in &files {
        let Some(key) = remote_key(&folder_path, file) else {
            continue;
        };
        let content_type = content_type_for(file);
        let body = fs::read(file)?;
        store.store(folder, &key, body, &content_type).await?;
        info!(bucket = folder, key = %key, content_type = %content_type, "uploaded object");
        println!("Uploaded: {key} ({content_type})");
    }
    Ok(())
}
