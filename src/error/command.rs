use thiserror::Error;

/// Fatal errors raised by a command before it touches any database.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("No app has been specified")]
    NoAppLabel,
    #[error("No database supplied")]
    NoDatabase,
    #[error("No installed app with label '{0}'")]
    UnknownApp(String),
    #[error("Database alias '{0}' is not configured")]
    UnknownDatabase(String),
    #[error("No model with table name '{0}'")]
    UnknownModel(String),
}
