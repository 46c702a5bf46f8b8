use thiserror::Error;

/// Failures of the object storage adapter.
///
/// Returned by `ImageStorage::upload`; the event service downgrades them to a
/// warning and a missing image URL.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing or reading the local staging file failed.
    #[error("Failed to stage upload in temporary file: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking staging task panicked or was cancelled.
    #[error("Upload staging task failed: {0}")]
    Staging(#[from] tokio::task::JoinError),

    /// The object store rejected the request or could not be reached.
    #[error(transparent)]
    ObjectStore(#[from] object_store::Error),
}
