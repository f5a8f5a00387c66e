use super::{DatabaseRouter, RowRef};

/// App labels of the framework apps kept in the system database.
pub static SYSTEM_APP_LABELS: [&str; 4] = ["admin", "auth", "contenttypes", "sessions"];

fn is_system_app(app_label: &str) -> bool {
    SYSTEM_APP_LABELS.contains(&app_label)
}

/// Routes the framework apps to the system database.
///
/// Reads go to the system database and migrations of these apps may only run
/// there. Writes are left to the rest of the chain.
#[derive(Debug, Clone)]
pub struct DefaultAppRouter {
    system_db: String,
}

impl DefaultAppRouter {
    pub fn new(system_db: &str) -> Self {
        Self {
            system_db: system_db.to_string(),
        }
    }
}

impl DatabaseRouter for DefaultAppRouter {
    fn db_for_read(&self, app_label: &str) -> Option<&str> {
        if is_system_app(app_label) {
            return Some(&self.system_db);
        }
        None
    }

    fn db_for_write(&self, _app_label: &str) -> Option<&str> {
        None
    }

    fn allow_relation(&self, first: &RowRef<'_>, second: &RowRef<'_>) -> Option<bool> {
        if is_system_app(first.app_label) && is_system_app(second.app_label) {
            return Some(true);
        }
        None
    }

    fn allow_migrate(&self, db: &str, app_label: &str) -> Option<bool> {
        if is_system_app(app_label) {
            return Some(db == self.system_db);
        }
        None
    }
}
