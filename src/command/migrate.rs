//! `migrate <app_label> --database <alias>`
//!
//! Both arguments are required. They are checked before any connection is
//! opened, in order: app label, database, installed app, configured alias.

use clap::Args;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    command::installed_app,
    config::Config,
    error::{command::CommandError, Error},
    routers::ConnectionRouter,
    startup::connect_to_database,
};

#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// Label of the app to migrate
    pub app_label: Option<String>,
    /// Alias of the database to migrate
    #[arg(long)]
    pub database: Option<String>,
}

/// Validated migration target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTarget<'a> {
    pub app_label: &'static str,
    pub database: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// Number of migrations applied.
    Applied(usize),
    /// The router chain does not allow the app on the requested database.
    Skipped,
}

impl MigrateArgs {
    pub fn new(app_label: Option<&str>, database: Option<&str>) -> Self {
        Self {
            app_label: app_label.map(str::to_string),
            database: database.map(str::to_string),
        }
    }

    /// Check that both arguments were given, without needing any configuration
    ///
    /// Empty strings count as missing.
    pub fn require(&self) -> Result<(&str, &str), CommandError> {
        let app_label = self
            .app_label
            .as_deref()
            .filter(|label| !label.is_empty())
            .ok_or(CommandError::NoAppLabel)?;
        let database = self
            .database
            .as_deref()
            .filter(|alias| !alias.is_empty())
            .ok_or(CommandError::NoDatabase)?;

        Ok((app_label, database))
    }

    pub fn validate<'a>(&'a self, config: &'a Config) -> Result<MigrationTarget<'a>, CommandError> {
        let (app_label, database) = self.require()?;

        let app_label =
            installed_app(app_label).ok_or_else(|| CommandError::UnknownApp(app_label.to_string()))?;
        let url = config
            .database_url_for(database)
            .ok_or_else(|| CommandError::UnknownDatabase(database.to_string()))?;

        Ok(MigrationTarget {
            app_label,
            database,
            url,
        })
    }
}

/// Validate the arguments, ask the routers and apply every pending migration.
pub async fn migrate(args: &MigrateArgs, config: &Config) -> Result<MigrateOutcome, Error> {
    let target = args.validate(config)?;

    let router = ConnectionRouter::from_config(config);
    if !router.allow_migrate(target.database, target.app_label) {
        info!(
            app_label = target.app_label,
            database = target.database,
            "Routers do not allow migrating this app on this database, skipping"
        );
        return Ok(MigrateOutcome::Skipped);
    }

    let db = connect_to_database(target.url).await?;
    apply(&db).await
}

/// Apply every pending migration on an open connection.
pub async fn apply(db: &DatabaseConnection) -> Result<MigrateOutcome, Error> {
    let pending = Migrator::get_pending_migrations(db).await?.len();

    Migrator::up(db, None).await?;
    info!(applied = pending, "Migrations applied");

    Ok(MigrateOutcome::Applied(pending))
}
