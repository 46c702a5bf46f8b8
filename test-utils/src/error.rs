use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// In-memory database could not be opened or a table could not be created.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
