//! Download pipeline: mirror a bucket's contents into the local project
//! folder of the same name.
//!
//! Lists every key (paginated), skips directory markers, recreates the
//! intermediate directory structure, and fetches each object to its local
//! path, overwriting unconditionally. A listing failure is fatal for the
//! run; so is any per-object failure, since no per-object isolation is kept.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::store::{ObjectStore, StoreError};

/// Local destination for a remote key under `folder`, one path segment per
/// forward-slash-separated key part.
pub fn local_path_for(folder: &Path, key: &str) -> PathBuf {
    key.split('/')
        .filter(|part| !part.is_empty())
        .fold(folder.to_path_buf(), |path, part| path.join(part))
}

/// Keys ending in a separator are directory placeholders, not objects.
pub fn is_directory_marker(key: &str) -> bool {
    key.ends_with('/')
}

/// Download every object in `bucket` into `folder_path`, creating the folder
/// and any intermediate directories as needed.
pub async fn download_bucket<S>(
    store: &S,
    folder_path: &Path,
    bucket: &str,
) -> Result<(), StoreError>
where
    S: ObjectStore + ?Sized,
{
    fs::create_dir_all(folder_path)?;

    let keys = store.list_keys(bucket).await?;
    if keys.is_empty() {
        println!("No files found in bucket '{bucket}'");
        return Ok(());
    }

    for key in &keys {
        if is_directory_marker(key) {
            continue;
        }
        let local_path = local_path_for(folder_path, key);
        if let Some(parent) = local_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = store.fetch(bucket, key).await?;
        fs::write(&local_path, body)?;
        info!(bucket = bucket, key = %key, path = %local_path.display(), "downloaded object");
        println!("Downloaded: {key}");
    }
    Ok(())
}
