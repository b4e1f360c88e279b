use aquawatch_core::alert::AlertThreshold;
use aquawatch_core::types::DbId;

/// Reservoir that readings are linked to when the request does not name one.
pub const DEFAULT_TARGET_RESERVOIR_ID: DbId = 4;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for in-flight alerts, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Reading ingestion and alerting settings.
    pub alerts: AlertConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            alerts: AlertConfig::from_env(),
        }
    }
}

/// Settings for the ingestion-and-alert flow.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Readings strictly above this level trigger an alert.
    pub threshold: AlertThreshold,
    /// Reservoir used when an ingestion request carries no `reservoir_id`.
    pub target_reservoir_id: DbId,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            threshold: AlertThreshold::default(),
            target_reservoir_id: DEFAULT_TARGET_RESERVOIR_ID,
        }
    }
}

impl AlertConfig {
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `ALERT_THRESHOLD`     | `200`   |
    /// | `TARGET_RESERVOIR_ID` | `4`     |
    ///
    /// Only the leading integer of `ALERT_THRESHOLD` is used; a value with
    /// none (or zero) falls back to the default rather than aborting startup.
    pub fn from_env() -> Self {
        let raw_threshold = std::env::var("ALERT_THRESHOLD").ok();
        let threshold = AlertThreshold::parse(raw_threshold.as_deref());
        if let Some(raw) = raw_threshold.as_deref() {
            if raw.trim().parse::<f64>().ok() != Some(threshold.value()) {
                tracing::warn!(
                    value = raw,
                    effective = threshold.value(),
                    "ALERT_THRESHOLD is not a plain integer"
                );
            }
        }

        let target_reservoir_id: DbId = std::env::var("TARGET_RESERVOIR_ID")
            .unwrap_or_else(|_| DEFAULT_TARGET_RESERVOIR_ID.to_string())
            .parse()
            .expect("TARGET_RESERVOIR_ID must be a valid i64");

        Self {
            threshold,
            target_reservoir_id,
        }
    }
}
