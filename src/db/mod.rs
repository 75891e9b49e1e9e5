//! Embedded persistence layer built on SQLite.
//!
//! Owns the on-disk database file, brings its schema up to date across
//! revisions without destroying data, executes parameterized statements on
//! per-call connections and exposes session-scoped repositories on top.

/// Database file resolution, template seeding and statement execution.
pub mod db;

/// Idempotent schema creation, column migration and reference data seeding.
pub mod schema;

/// Read-only category repository.
pub mod categories;

/// Owner-scoped task repository.
pub mod tasks;

/// User registration, uniqueness probes and authentication.
pub mod users;
