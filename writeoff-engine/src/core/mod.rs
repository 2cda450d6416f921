//! Configuration and process bootstrap

mod config;

pub use config::Config;

use shared::AppResult;

/// Set up the process environment: .env file and logging
pub fn setup_environment() -> AppResult<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    crate::utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
