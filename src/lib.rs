pub mod cli_args;
pub mod error;
mod extractor;
mod middleware;
pub mod person;
mod route;
pub mod server;
pub mod state;
mod traits;
