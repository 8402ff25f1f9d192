//! # surveyhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `surveyhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Hand every operation its own transaction (see [`session`])
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `surveyhub-app` (for port traits) and `surveyhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod mental_health_repo;
pub mod pool;
pub mod session;
pub mod social_media_repo;

mod row;

pub use error::StorageError;
pub use mental_health_repo::SqliteMentalHealthRepository;
pub use pool::{Config, Database};
pub use social_media_repo::SqliteSocialMediaRepository;
