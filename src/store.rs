//! # store: object-storage capability interface
//!
//! This module defines the [`ObjectStore`] trait used by the upload and
//! download pipelines, plus the classified error type every implementation
//! maps provider failures into.
//!
//! ## Interface & Extensibility
//! - Implement [`ObjectStore`] to add a new storage backend; the production
//!   implementation lives in [`crate::s3`].
//! - All methods are async and return [`StoreError`].
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so tests can drive the transfer
//!   loops with deterministic mocks instead of a live bucket.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// The three failure kinds the tool distinguishes when talking to storage,
/// plus local I/O while moving bytes to and from disk. Each renders as the
/// exact message shown to the user.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("AWS credentials not found. Configure the AWS CLI or set environment variables.")]
    MissingCredentials,
    #[error("S3 bucket '{0}' does not exist")]
    NoSuchBucket(String),
    #[error("{0}")]
    Provider(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability trait over a remote object store.
///
/// Buckets are identified by name only; keys are forward-slash separated.
/// Implemented by the real S3 client and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List every object key in the bucket, following pagination to the end.
    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>, StoreError>;

    /// Fetch the full body of a single object.
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Store an object under `key` with the given content type attached.
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;
}
