//! Persistence layer: PostgreSQL room-snapshot store and catalogs.
//!
//! The snapshot store is deliberately document-shaped: one row per room
//! id with a `JSONB` payload column, written through an atomic
//! upsert-by-key. The concrete implementation uses `sqlx::PgPool` for
//! async PostgreSQL access.

pub mod models;
pub mod postgres;

pub use postgres::PostgresStore;
