//! Command-line commands of the `inventory` binary.

pub mod describe;
pub mod migrate;
pub mod showmigrations;

use clap::{Parser, Subcommand};

use crate::{config::Config, error::Error};

pub use describe::DescribeArgs;
pub use migrate::{MigrateArgs, MigrateOutcome};
pub use showmigrations::ShowMigrationsArgs;

/// Apps whose migrations this binary manages.
pub static INSTALLED_APPS: &[&str] = &[entity::APP_LABEL];

#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(about = "Inventory catalog management commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply the migrations of an app to one database
    Migrate(MigrateArgs),
    /// List migrations with their applied status
    #[command(name = "showmigrations")]
    ShowMigrations(ShowMigrationsArgs),
    /// Print the schema of the inventory tables
    Describe(DescribeArgs),
}

/// Run a parsed command, writing its report to stdout.
pub async fn run(command: Command, config: &Config) -> Result<(), Error> {
    match command {
        Command::Migrate(args) => match migrate::migrate(&args, config).await? {
            MigrateOutcome::Applied(0) => println!("No migrations to apply."),
            MigrateOutcome::Applied(count) => println!("Applied {} migration(s).", count),
            MigrateOutcome::Skipped => println!("Migrations not allowed on this database."),
        },
        Command::ShowMigrations(args) => {
            for status in showmigrations::show_migrations(&args, config).await? {
                println!("{}", status);
            }
        }
        Command::Describe(args) => {
            for model in describe::describe(&args)? {
                println!("{}", model);
            }
        }
    }

    Ok(())
}

/// Check `app_label` against [`INSTALLED_APPS`].
pub(crate) fn installed_app(app_label: &str) -> Option<&'static str> {
    INSTALLED_APPS.iter().copied().find(|app| *app == app_label)
}
