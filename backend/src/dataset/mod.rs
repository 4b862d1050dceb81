//! Dataset access for eclipse records.
//!
//! The dataset is reached through the [`EclipseRepository`] trait so the query
//! layer does not care whether records were loaded once at startup or are
//! re-read for every request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::eclipses) - query operations  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs)                       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │ SnapshotRepository           │ FileRepository
//!     │ (load once at startup)       │ (load per request)
//!     └──────────────────────────────┘
//! ```
//!
//! There is no process-global handle: the binary builds one repository via
//! [`RepositoryFactory`] and hands it to the HTTP state.

pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use error::{DatasetError, DatasetResult, ErrorContext};
pub use factory::{LoadStrategy, RepositoryFactory};
pub use repositories::{FileRepository, SnapshotRepository};
pub use repository::{DatasetSummary, EclipseRepository};
