use sea_orm::DatabaseConnection;

use crate::server::reporter::ErrorReporter;

/// State shared by every request handler.
///
/// Built once at startup; repositories and services are constructed per request from it.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub error_reporter: ErrorReporter,
}

impl From<(DatabaseConnection, ErrorReporter)> for AppState {
    fn from((db, error_reporter): (DatabaseConnection, ErrorReporter)) -> Self {
        Self { db, error_reporter }
    }
}
