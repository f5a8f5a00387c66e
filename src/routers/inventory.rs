use super::{DatabaseRouter, RowRef};

/// Routes the `inventory` app to its own database.
#[derive(Debug, Clone)]
pub struct InventoryAppRouter {
    inventory_db: String,
}

impl InventoryAppRouter {
    pub fn new(inventory_db: &str) -> Self {
        Self {
            inventory_db: inventory_db.to_string(),
        }
    }
}

fn is_inventory_app(app_label: &str) -> bool {
    app_label == entity::APP_LABEL
}

impl DatabaseRouter for InventoryAppRouter {
    fn db_for_read(&self, app_label: &str) -> Option<&str> {
        if is_inventory_app(app_label) {
            return Some(&self.inventory_db);
        }
        None
    }

    fn db_for_write(&self, app_label: &str) -> Option<&str> {
        if is_inventory_app(app_label) {
            return Some(&self.inventory_db);
        }
        None
    }

    fn allow_relation(&self, first: &RowRef<'_>, second: &RowRef<'_>) -> Option<bool> {
        if is_inventory_app(first.app_label) || is_inventory_app(second.app_label) {
            return Some(true);
        }
        None
    }

    fn allow_migrate(&self, db: &str, app_label: &str) -> Option<bool> {
        if is_inventory_app(app_label) {
            return Some(db == self.inventory_db);
        }
        None
    }
}
