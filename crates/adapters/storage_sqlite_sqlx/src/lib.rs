//! # devman-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `devman_app::ports`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Enforce uniqueness as the final authority: the handler-level
//!   pre-checks are race-prone, so unique indexes back them, and index
//!   violations are translated into the domain `Conflict` taxonomy
//!
//! ## Dependency rule
//! Depends on `devman-app` (for port traits) and `devman-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod codec;
pub mod client_repo;
pub mod device_repo;
pub mod error;
pub mod event_repo;
pub mod pool;

pub use client_repo::SqliteClientRepository;
pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use event_repo::SqliteEventRepository;
pub use pool::{Config, Database};
