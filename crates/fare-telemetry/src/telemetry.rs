use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use fare_common::config::TelemetryConfig;
use log::{debug, LevelFilter, Log};

use crate::error::{TelemetryError, TelemetryResult};

enum TelemetryStatus {
    Uninitialized,
    Initialized,
    Failed,
    Finalized,
}

static TELEMETRY_STATUS: Mutex<TelemetryStatus> = Mutex::new(TelemetryStatus::Uninitialized);

/// Installs the process-wide logger.
///
/// The log filter is taken from `RUST_LOG` and falls back to the configured
/// default level. Telemetry can be initialized only once per process.
pub fn init_telemetry(config: &TelemetryConfig) -> TelemetryResult<()> {
    let mut status = TELEMETRY_STATUS
        .lock()
        .map_err(|e| TelemetryError::internal(e.to_string()))?;

    match *status {
        TelemetryStatus::Uninitialized => match init_logs(config) {
            Ok(()) => {
                debug!("telemetry initialized");
                *status = TelemetryStatus::Initialized;
                Ok(())
            }
            Err(e) => {
                *status = TelemetryStatus::Failed;
                Err(e)
            }
        },
        TelemetryStatus::Initialized => {
            Err(TelemetryError::internal("telemetry already initialized"))
        }
        TelemetryStatus::Failed => Err(TelemetryError::internal(
            "telemetry failed to initialize previously",
        )),
        TelemetryStatus::Finalized => Err(TelemetryError::internal(
            "telemetry has been finalized and cannot be re-initialized",
        )),
    }
}

fn init_logs(config: &TelemetryConfig) -> TelemetryResult<()> {
    let default_level = parse_level(&config.default_log_level)?;
    let logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.as_str()),
    )
    .format(move |buf, record| {
        let level = record.level();
        let target = record.target();
        let style = buf.default_level_style(level);
        let timestamp = buf.timestamp();
        let args = record.args();
        writeln!(buf, "[{timestamp} {style}{level}{style:#} {target}] {args}")
    })
    .build();
    let max_level = logger.filter();

    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| TelemetryError::internal(e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}

fn parse_level(level: &str) -> TelemetryResult<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| TelemetryError::invalid(format!("log level: {level}")))
}

pub fn shutdown_telemetry() {
    debug!("Shutting down telemetry...");
    log::logger().flush();
    if let Ok(mut status) = TELEMETRY_STATUS.lock() {
        if let TelemetryStatus::Initialized = *status {
            *status = TelemetryStatus::Finalized;
        }
    }
}
