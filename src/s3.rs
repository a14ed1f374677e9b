//! Production [`ObjectStore`] backed by the AWS SDK.
//!
//! Credentials and region come entirely from the ambient provider chain
//! (environment, shared config, instance metadata); the tool has no
//! credential surface of its own.

use aws_config::BehaviorVersion;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use crate::store::{ObjectStore, StoreError};

/// S3 client handle shared by both transfer directions.
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Build a client from the default credential/region chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: Client::new(&config),
        }
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Map an SDK failure onto the three user-facing failure kinds.
fn classify<E>(bucket: &str, err: SdkError<E>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    if err.code() == Some("NoSuchBucket") {
        return StoreError::NoSuchBucket(bucket.to_string());
    }
    let rendered = format!("{}", DisplayErrorContext(&err));
    if rendered.contains("credential") || rendered.contains("Credential") {
        return StoreError::MissingCredentials;
    }
    StoreError::Provider(rendered)
}

#[async_trait::async_trait]
impl ObjectStore for S3Store {
    async fn list_keys(&self, bucket: &str) -> Result<Vec<String>, StoreError> {
        debug!(bucket = bucket, "listing objects");
        let mut keys = Vec::new();
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| classify(bucket, e))?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    keys.push(key.to_string());
                }
            }
        }
        info!(bucket = bucket, count = keys.len(), "listed objects");
        Ok(keys)
    }

    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(bucket, e))?;
        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Provider(format!("failed to read object body: {e}")))?;
        Ok(body.into_bytes().to_vec())
    }

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| classify(bucket, e))?;
        Ok(())
    }
}
