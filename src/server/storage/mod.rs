//! Object storage for event images.
//!
//! `ImageStorage` is the seam the event service depends on; `s3::S3ImageStorage` is the
//! production implementation backed by the `object_store` crate.

pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;

use crate::server::error::storage::StorageError;

/// An image file received with an event creation request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied file name, used as the suffix of the object key.
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Uploads images and returns the URL they are publicly reachable at.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores `image` under a collision-resistant key.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(StorageError)` - Staging or upload failed; nothing is left on local disk
    async fn upload(&self, image: ImageUpload) -> Result<String, StorageError>;
}
