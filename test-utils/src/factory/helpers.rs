//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// business identifier to prevent unique index collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client and a PDF record referencing it.
///
/// The PDF record points at `path`; no file is written. Use this when a test needs
/// metadata only, e.g. listing or enrichment tests.
///
/// # Arguments
/// - `db` - Database connection
/// - `path` - Storage path recorded on the PDF row
///
/// # Returns
/// - `Ok((client, pdf))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pdf_with_client(
    db: &DatabaseConnection,
    path: &str,
) -> Result<(entity::client::Model, entity::pdf::Model), DbErr> {
    let client = crate::factory::client::create_client(db).await?;
    let pdf = crate::factory::pdf::PdfFactory::new(db)
        .path(path)
        .client_id(client.id)
        .build()
        .await?;

    Ok((client, pdf))
}
