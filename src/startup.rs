use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, database::Databases, error::Error, routers::ConnectionRouter};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Connect to a single database
pub async fn connect_to_database(url: &str) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Connect to the database configured for `alias`
pub async fn connect_to_alias(config: &Config, alias: &str) -> Result<DatabaseConnection, Error> {
    let url = config
        .database_url_for(alias)
        .ok_or_else(|| Error::ConnectionNotRegistered(alias.to_string()))?;

    info!(alias, "Connecting to database");
    connect_to_database(url).await
}

/// Connect to every configured database and register them behind the router chain
pub async fn connect_to_databases(config: &Config) -> Result<Databases, Error> {
    let mut databases = Databases::new(ConnectionRouter::from_config(config));

    for (alias, _) in config.databases() {
        let db = connect_to_alias(config, alias).await?;
        databases.register(alias, db);
    }

    Ok(databases)
}
