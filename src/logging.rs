// src/logging.rs

use crate::config::get_config;
use crate::errors::{JurisError, JurisResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file-backed logger. The TUI owns stdout, so everything goes to
/// `jurispro.log` in the working directory.
pub fn initialize_logging() -> JurisResult<LoggerHandle> {
    let config = get_config();
    Logger::try_with_str(&config.log_spec)
        .map_err(|e| JurisError::config_error(format!("Invalid log spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("jurispro").suppress_timestamp())
        .append()
        .start()
        .map_err(|e| JurisError::config_error(format!("Failed to start logger: {}", e)))
}

/// Records one generation API call for diagnostics.
pub fn log_api_call(log: &ApiCallLog) {
    log::info!(
        "{} - {} - Status: {} - Time: {}ms",
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    );
}
