pub mod changes;
pub mod download;
pub mod s3;
pub mod select;
pub mod store;
pub mod upload;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use changes::GitChangeLister;
use s3::S3Store;
use store::StoreError;

/// CLI for bucket-sync: mirror project folders to and from S3 buckets.
#[derive(Parser)]
#[clap(
    name = "bucket-sync",
    version,
    about = "Synchronise local project folders with S3 buckets of the same name"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a project folder to the bucket named after it
    Upload {
        /// Directory whose subdirectories are the candidate project folders
        #[clap(long, default_value = ".")]
        project_root: PathBuf,
    },
    /// Download bucket contents into the project folder named after it
    Download {
        /// Directory whose subdirectories are the candidate project folders
        #[clap(long, default_value = ".")]
        project_root: PathBuf,
    },
}

/// Extracted CLI logic entrypoint for integration tests and main().
///
/// Exit status is 1 only when no folder was selected or the chosen folder is
/// missing; transfer failures report their classified message and still exit
/// 0.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Upload { project_root } => upload_command(&project_root).await,
        Commands::Download { project_root } => download_command(&project_root).await,
    }
}

async fn upload_command(project_root: &Path) -> Result<ExitCode> {
    let Some(folder) = select_existing_folder(project_root)? else {
        return Ok(ExitCode::from(1));
    };

    let changed_only = select::confirm("\nUpload only changed files (detected by git)?")?;
    if changed_only {
        println!("\nChecking for changed files in '{folder}' using git...");
    } else {
        println!("\nUploading all files in folder '{folder}' to bucket '{folder}'");
    }

    let store = S3Store::from_env().await;
    let lister = GitChangeLister::new(project_root.to_path_buf());
    if let Err(e) = upload::upload_folder(&store, &lister, project_root, &folder, changed_only).await
    {
        report_transfer_error(&e);
    }
    Ok(ExitCode::SUCCESS)
}

async fn download_command(project_root: &Path) -> Result<ExitCode> {
    let Some(folder) = select_existing_folder(project_root)? else {
        return Ok(ExitCode::from(1));
    };

    println!("\nDownloading from bucket '{folder}' to local folder '{folder}'");

    let store = S3Store::from_env().await;
    let folder_path = project_root.join(&folder);
    if let Err(e) = download::download_bucket(&store, &folder_path, &folder).await {
        report_transfer_error(&e);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the interactive selection and check the chosen folder exists on disk.
fn select_existing_folder(project_root: &Path) -> Result<Option<String>> {
    let Some(folder) = select::select_folder(project_root)? else {
        println!("No folder selected");
        return Ok(None);
    };
    let folder_path = project_root.join(&folder);
    if !folder_path.is_dir() {
        eprintln!("Error: folder {} does not exist", folder_path.display());
        return Ok(None);
    }
    Ok(Some(folder))
}

/// Print the classified failure for the user and end the operation.
fn report_transfer_error(err: &StoreError) {
    tracing::error!(error = %err, "transfer aborted");
    match err {
        StoreError::MissingCredentials => eprintln!("{err}"),
        _ => eprintln!("Error: {err}"),
    }
}
