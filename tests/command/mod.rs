use inventory::{
    command::{
        migrate::{apply, migrate},
        MigrateArgs, MigrateOutcome,
    },
    config::Config,
    error::{command::CommandError, Error},
};

mod cli;
mod migrate;

fn config() -> Config {
    Config::from_lookup(|name: &str| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        _ => None,
    })
    .unwrap()
}
