use clap::Parser;

use inventory::{
    command::{Cli, Command},
    config::Config,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    // Missing arguments are reported even when no database is configured
    if let Command::Migrate(args) = &cli.command {
        if let Err(e) = args.require() {
            eprintln!("CommandError: {}", e);
            std::process::exit(1);
        }
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = inventory::command::run(cli.command, &config).await {
        eprintln!("CommandError: {}", e);
        std::process::exit(1);
    }
}
