use std::{io::Write, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    aws::AmazonS3Builder, path::Path, Attribute, Attributes, ObjectStore, PutOptions, PutPayload,
};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::server::{
    config::Config,
    error::storage::StorageError,
    storage::{ImageStorage, ImageUpload},
};

/// Fallback object name suffix when the client sends no usable file name.
const DEFAULT_FILENAME: &str = "image";

/// Image storage backed by an `ObjectStore`, S3 in production.
///
/// Each upload is staged in a temporary local file which is removed once the upload
/// attempt finishes, whether it succeeded or not.
pub struct S3ImageStorage {
    store: Arc<dyn ObjectStore>,
    public_base_url: String,
    temp_dir: Option<PathBuf>,
}

impl S3ImageStorage {
    /// Creates a storage adapter over an existing object store.
    ///
    /// # Arguments
    /// - `store` - Object store receiving the uploads
    /// - `public_base_url` - URL prefix that object keys are appended to
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            temp_dir: None,
        }
    }

    /// Creates an S3-backed adapter for the configured bucket and region.
    ///
    /// Credentials are resolved from the environment by the S3 client.
    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let store = AmazonS3Builder::from_env()
            .with_region(&config.aws_region)
            .with_bucket_name(&config.aws_bucket_name)
            .build()?;

        let storage = Self::new(Arc::new(store), config.aws_public_url.clone());

        Ok(match &config.upload_temp_dir {
            Some(dir) => storage.with_temp_dir(dir),
            None => storage,
        })
    }

    /// Stages uploads in `dir` instead of the system temporary directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Builds the object key `{uuid}-{filename}`.
    ///
    /// Only the last path component of the client file name is kept, and every character
    /// outside `[A-Za-z0-9._-]` becomes `_`, so the key is its own URL path segment and
    /// cannot land under another prefix.
    pub fn object_key(filename: &str) -> String {
        let name = std::path::Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILENAME);

        let name: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        format!("{}-{}", Uuid::new_v4(), name)
    }

    fn public_url(&self, location: &Path) -> String {
        format!("{}/{}", self.public_base_url, location)
    }

    /// Writes `bytes` to a temporary file and reads the staged content back.
    ///
    /// The returned `NamedTempFile` deletes the file when closed or dropped.
    async fn stage(&self, bytes: Bytes) -> Result<(NamedTempFile, Bytes), StorageError> {
        let temp_dir = self.temp_dir.clone();

        tokio::task::spawn_blocking(move || -> Result<(NamedTempFile, Bytes), StorageError> {
            let mut temp_file = match temp_dir {
                Some(dir) => NamedTempFile::new_in(dir)?,
                None => NamedTempFile::new()?,
            };

            temp_file.write_all(&bytes)?;
            temp_file.flush()?;

            let staged = std::fs::read(temp_file.path())?;

            Ok((temp_file, Bytes::from(staged)))
        })
        .await?
    }
}

#[async_trait]
impl ImageStorage for S3ImageStorage {
    async fn upload(&self, image: ImageUpload) -> Result<String, StorageError> {
        let location = Path::from(Self::object_key(&image.filename));
        let (temp_file, payload) = self.stage(image.bytes).await?;

        let mut attributes = Attributes::new();
        if let Some(content_type) = image.content_type {
            attributes.insert(Attribute::ContentType, content_type.into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let result = self
            .store
            .put_opts(&location, PutPayload::from(payload), options)
            .await;

        if let Err(e) = temp_file.close() {
            tracing::warn!("Failed to remove staged upload file: {}", e);
        }

        result?;

        tracing::info!(key = %location, "Uploaded image");

        Ok(self.public_url(&location))
    }
}
