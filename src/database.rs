//! Connections to every configured database, selected through the routers.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{error::Error, model::app::AppModel, routers::ConnectionRouter};

/// Open connections keyed by alias, plus the router chain that picks between them.
pub struct Databases {
    connections: HashMap<String, DatabaseConnection>,
    router: ConnectionRouter,
}

impl Databases {
    pub fn new(router: ConnectionRouter) -> Self {
        Self {
            connections: HashMap::new(),
            router,
        }
    }

    /// Register a connection under `alias`, replacing any previous one.
    pub fn register(&mut self, alias: &str, db: DatabaseConnection) {
        self.connections.insert(alias.to_string(), db);
    }

    pub fn get(&self, alias: &str) -> Result<&DatabaseConnection, Error> {
        self.connections
            .get(alias)
            .ok_or_else(|| Error::ConnectionNotRegistered(alias.to_string()))
    }

    pub fn router(&self) -> &ConnectionRouter {
        &self.router
    }

    /// Registered aliases in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.connections.keys().map(String::as_str)
    }

    /// Connection that serves reads for entity `E`.
    pub fn reader<E: AppModel>(&self) -> Result<&DatabaseConnection, Error> {
        self.get(self.router.db_for_read_model::<E>())
    }

    /// Connection that serves writes for entity `E`.
    pub fn writer<E: AppModel>(&self) -> Result<&DatabaseConnection, Error> {
        self.get(self.router.db_for_write_model::<E>())
    }
}
