//! Error types for the inventory application.
//!
//! Domain errors (configuration, commands) are defined in their own modules and
//! aggregated here together with the database errors surfaced by sea-orm.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError};

/// Main error type for the inventory application.
///
/// Uses `thiserror`'s `#[from]` so `?` converts domain and database errors.
/// Constraint violations (unique, RESTRICT on delete, not null) arrive as
/// `DbErr` from the database and are passed through unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Command precondition failure (missing arguments, unknown app or alias).
    #[error(transparent)]
    CommandError(#[from] CommandError),
    /// No connection is registered for the alias a router selected.
    #[error("No connection registered for database alias '{0}'")]
    ConnectionNotRegistered(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
