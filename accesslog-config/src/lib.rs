pub mod setting;
pub mod config;
pub mod dbconfig;

pub use setting::Settings;
pub use config::Config;
pub use dbconfig::{ConnectionConfig, DbConfig, RetryConfig};
