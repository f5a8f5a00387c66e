//! `showmigrations [app_label] [--database <alias>]`

use std::fmt;

use clap::Args;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::{
    command::installed_app,
    config::Config,
    error::{command::CommandError, Error},
    routers::ConnectionRouter,
    startup::connect_to_database,
};

#[derive(Args, Debug, Clone, Default)]
pub struct ShowMigrationsArgs {
    /// Label of the app to list, defaults to every installed app
    pub app_label: Option<String>,
    /// Alias of the database to inspect, defaults to the app's read database
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub name: String,
    pub applied: bool,
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.applied { "X" } else { " " };
        write!(f, " [{}] {}", mark, self.name)
    }
}

/// List every migration with its status on the selected database.
pub async fn show_migrations(
    args: &ShowMigrationsArgs,
    config: &Config,
) -> Result<Vec<MigrationStatus>, Error> {
    let app_label = match args.app_label.as_deref() {
        Some(label) => {
            installed_app(label).ok_or_else(|| CommandError::UnknownApp(label.to_string()))?
        }
        None => entity::APP_LABEL,
    };

    let router = ConnectionRouter::from_config(config);
    let database = args
        .database
        .as_deref()
        .unwrap_or_else(|| router.db_for_read(app_label));
    let url = config
        .database_url_for(database)
        .ok_or_else(|| CommandError::UnknownDatabase(database.to_string()))?;

    let db = connect_to_database(url).await?;
    migration_status(&db).await
}

/// Applied migrations first, then pending ones, each group in order.
pub async fn migration_status(db: &DatabaseConnection) -> Result<Vec<MigrationStatus>, Error> {
    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;

    let statuses = applied
        .iter()
        .map(|migration| MigrationStatus {
            name: migration.name().to_string(),
            applied: true,
        })
        .chain(pending.iter().map(|migration| MigrationStatus {
            name: migration.name().to_string(),
            applied: false,
        }))
        .collect();

    Ok(statuses)
}
