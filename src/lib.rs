pub mod cli;
pub mod config;
pub mod context;
pub mod observability;

pub use config::Config;
pub use context::AppContext;
