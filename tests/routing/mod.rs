use inventory::{config::Config, error::Error, startup::connect_to_databases};
use sea_orm::{ConnectionTrait, DbBackend};

fn config() -> Config {
    Config::from_lookup(|name: &str| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "INVENTORY_DB_ALIAS" => Some("catalog".to_string()),
        _ => None,
    })
    .unwrap()
}

/// Expected: one connection per configured alias
#[tokio::test]
async fn connects_every_configured_alias() -> Result<(), Error> {
    let databases = connect_to_databases(&config()).await?;

    let mut aliases: Vec<&str> = databases.aliases().collect();
    aliases.sort();

    assert_eq!(aliases, vec!["catalog", "default", "system_db"]);

    Ok(())
}

#[tokio::test]
async fn routes_inventory_models_to_configured_alias() -> Result<(), Error> {
    let databases = connect_to_databases(&config()).await?;

    assert_eq!(
        databases
            .router()
            .db_for_write_model::<entity::prelude::Product>(),
        "catalog"
    );
    assert_eq!(databases.router().db_for_read("auth"), "system_db");
    assert_eq!(databases.router().db_for_write("auth"), "default");

    let db = databases.writer::<entity::prelude::Product>()?;
    assert_eq!(db.get_database_backend(), DbBackend::Sqlite);

    Ok(())
}

#[tokio::test]
async fn only_inventory_alias_accepts_inventory_migrations() -> Result<(), Error> {
    let databases = connect_to_databases(&config()).await?;
    let router = databases.router();

    assert!(router.allow_migrate("catalog", "inventory"));
    assert!(!router.allow_migrate("default", "inventory"));
    assert!(!router.allow_migrate("system_db", "inventory"));
    assert!(router.allow_migrate("system_db", "sessions"));

    Ok(())
}
