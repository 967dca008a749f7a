//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let admin = factory::user::create_admin(&db).await?;
//!     let client = factory::client::create_client(&db).await?;
//!     let (client, pdf) = factory::helpers::create_pdf_with_client(&db, "/tmp/a.pdf").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let formation = factory::formation::FormationFactory::new(&db)
//!     .software("ABAQUS")
//!     .schedule_day("J1", "Introduction")
//!     .build()
//!     .await?;
//! ```

pub mod client;
pub mod formation;
pub mod helpers;
pub mod pdf;
pub mod user;
