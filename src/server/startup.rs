use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::pdf::PdfService,
    state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer.
///
/// With `CORS_ORIGIN` set only that origin is allowed; otherwise any origin is.
///
/// # Returns
/// - `Ok(CorsLayer)` - Configured layer
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin =
                HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ORIGIN".to_string(),
                    value: origin.clone(),
                })?;

            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}

/// Removes orphaned uploads and reports records whose file is missing.
///
/// Runs once before the server accepts requests.
pub async fn reconcile_uploads(state: &AppState) -> Result<(), AppError> {
    let report = PdfService::new(&state.db, &state.storage)
        .reconcile()
        .await?;

    if report.removed_orphans.is_empty() && report.missing_artifacts.is_empty() {
        tracing::info!(
            "Upload directory {} is consistent",
            state.storage.dir().display()
        );
    } else {
        tracing::warn!(
            "Upload reconciliation removed {} orphaned files, {} records have no file",
            report.removed_orphans.len(),
            report.missing_artifacts.len()
        );
    }

    Ok(())
}
