//! File logging through tracing

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

const DEFAULT_FILTER: &str = "fleetadmin=info,reqwest=warn,hyper=warn";

/// Filter directives: `RUST_LOG`, then `FLEETADMIN_LOGLEVEL`, then the default.
pub fn log_filter(rust_log: Option<String>, app_log: Option<String>) -> String {
    rust_log
        .filter(|s| !s.is_empty())
        .or(app_log.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Sends every event to `{data_dir}/fleetadmin.log`; the terminal is owned
/// by the TUI.
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let directives = log_filter(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let filter = EnvFilter::try_new(&directives).or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Like `std::dbg!`, but emits a `tracing` event (DEBUG unless a level is
/// given) instead of printing to stderr.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        $crate::trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        $crate::trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        $crate::trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}
