use std::sync::Arc;

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    storage::{s3::S3ImageStorage, ImageStorage},
};

const DEFAULT_LOG_FILTER: &str = "info,sea_orm=warn,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise `DEFAULT_LOG_FILTER`. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing already initialized, skipping re-initialization");
    }
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// schema is up-to-date.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the S3-backed image storage adapter.
///
/// Credentials are read by the S3 client from the standard `AWS_*` environment
/// variables; region and bucket come from `config`.
pub fn setup_image_storage(config: &Config) -> Result<Arc<dyn ImageStorage>, AppError> {
    let storage = S3ImageStorage::from_config(config)?;

    tracing::info!(
        bucket = %config.aws_bucket_name,
        region = %config.aws_region,
        "Configured image storage"
    );

    Ok(Arc::new(storage))
}

/// Resolves when the process receives Ctrl+C.
///
/// If the signal handler cannot be installed the server keeps running until killed.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
