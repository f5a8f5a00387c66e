//! Database routing by app label.
//!
//! A router answers four questions about an app label: which database serves
//! reads, which serves writes, whether two rows may be related and whether the
//! app's migrations may run against a database. Each answer is optional; `None`
//! means the router has no opinion and the next router in the chain decides.

pub mod default;
pub mod inventory;

use tracing::debug;

pub use default::DefaultAppRouter;
pub use inventory::InventoryAppRouter;

use crate::{config::Config, model::app::AppModel};

/// Alias of the database used when no router picks one.
pub static DEFAULT_DB_ALIAS: &str = "default";

/// A row taking part in a relation check: the app it belongs to and the
/// database it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRef<'a> {
    pub app_label: &'a str,
    pub db: &'a str,
}

impl<'a> RowRef<'a> {
    pub fn new(app_label: &'a str, db: &'a str) -> Self {
        Self { app_label, db }
    }
}

pub trait DatabaseRouter: Send + Sync {
    /// Database that should serve reads for models of `app_label`.
    fn db_for_read(&self, app_label: &str) -> Option<&str>;

    /// Database that should serve writes for models of `app_label`.
    fn db_for_write(&self, app_label: &str) -> Option<&str>;

    /// Whether a relation between the two rows is allowed.
    fn allow_relation(&self, first: &RowRef<'_>, second: &RowRef<'_>) -> Option<bool>;

    /// Whether migrations of `app_label` may run against the database `db`.
    fn allow_migrate(&self, db: &str, app_label: &str) -> Option<bool>;
}

/// Ordered chain of routers; the first router with an opinion wins.
pub struct ConnectionRouter {
    routers: Vec<Box<dyn DatabaseRouter>>,
}

impl ConnectionRouter {
    pub fn new(routers: Vec<Box<dyn DatabaseRouter>>) -> Self {
        Self { routers }
    }

    /// The system app router followed by the inventory router, using the
    /// aliases from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            Box::new(DefaultAppRouter::new(&config.system_db_alias)),
            Box::new(InventoryAppRouter::new(&config.inventory_db_alias)),
        ])
    }

    pub fn db_for_read(&self, app_label: &str) -> &str {
        let db = self
            .routers
            .iter()
            .find_map(|router| router.db_for_read(app_label))
            .unwrap_or(DEFAULT_DB_ALIAS);

        debug!(app_label, db, "routed read");
        db
    }

    pub fn db_for_write(&self, app_label: &str) -> &str {
        let db = self
            .routers
            .iter()
            .find_map(|router| router.db_for_write(app_label))
            .unwrap_or(DEFAULT_DB_ALIAS);

        debug!(app_label, db, "routed write");
        db
    }

    /// Without an opinion from any router, rows may only be related when they
    /// live in the same database.
    pub fn allow_relation(&self, first: &RowRef<'_>, second: &RowRef<'_>) -> bool {
        self.routers
            .iter()
            .find_map(|router| router.allow_relation(first, second))
            .unwrap_or(first.db == second.db)
    }

    /// Without an opinion from any router, migrations are allowed.
    pub fn allow_migrate(&self, db: &str, app_label: &str) -> bool {
        let allowed = self
            .routers
            .iter()
            .find_map(|router| router.allow_migrate(db, app_label))
            .unwrap_or(true);

        debug!(app_label, db, allowed, "checked migration routing");
        allowed
    }

    pub fn db_for_read_model<E: AppModel>(&self) -> &str {
        self.db_for_read(E::APP_LABEL)
    }

    pub fn db_for_write_model<E: AppModel>(&self) -> &str {
        self.db_for_write(E::APP_LABEL)
    }
}
