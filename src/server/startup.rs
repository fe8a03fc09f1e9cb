use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error, reporter::ErrorReporter};

/// Install the global tracing subscriber, defaulting to `info` when `RUST_LOG` is unset
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .acquire_timeout(config.db_acquire_timeout);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the error-logging sink client, disabled when no sink URL is configured
pub fn build_error_reporter(config: &Config) -> Result<ErrorReporter, Error> {
    let reporter = ErrorReporter::new(&config.service_name, config.error_log_url.clone())?;

    if !reporter.is_enabled() {
        tracing::info!("ERROR_LOG_URL is not set, error reporting is disabled");
    }

    Ok(reporter)
}
