//! # TaskEasy - locally persisted task tracker
//!
//! A command-line task tracker built around an embedded SQLite persistence
//! layer with per-user task lists and categories.
//!
//! ## Features
//!
//! - **Self-Migrating Schema**: Tables and columns are brought up to date on
//!   every start without touching existing data
//! - **Per-User Tasks**: Every query is scoped to the authenticated user
//! - **Categories**: A fixed default set is seeded on first run
//! - **Safe Statements**: All SQL is parameterized; dates are stored in a
//!   fixed `dd/MM/yyyy` text format
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskeasy::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
