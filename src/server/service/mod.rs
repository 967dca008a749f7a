//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness conflicts, referential checks, and filter semantics
//! - **Orchestration**: Coordinating repository calls with the PDF file store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Compensation**: Undoing the file write when a PDF record cannot be inserted

pub mod client;
pub mod formation;
pub mod pdf;
pub mod storage;
