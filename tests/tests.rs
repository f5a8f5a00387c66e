mod command;
mod routing;
mod schema;
