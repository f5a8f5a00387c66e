//! Inventory catalog core modules.
//!
//! The catalog schema itself lives in the `entity` crate and its migrations in
//! the `migration` crate. This crate wires them to one or more databases:
//! configuration, app-label based database routing, repositories over the
//! catalog tables, schema introspection and the command-line commands.

pub mod command;
pub mod config;
pub mod data;
pub mod database;
pub mod error;
pub mod model;
pub mod routers;
pub mod schema;
pub mod startup;
