use shared::{AppError, AppResult};

/// Engine configuration - everything the job needs to reach the ledger
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LEDGER_BASE_URL | http://localhost:8089 | Ledger REST base URL |
/// | LEDGER_AUTH_URL | {base}/oauth/token | Token issuance endpoint |
/// | LEDGER_CLIENT_ID | (empty) | OAuth client id |
/// | LEDGER_CLIENT_SECRET | (empty) | OAuth client secret |
/// | ADJUSTMENT_REASON_CODE | Write-off | Reason code stamped on every adjustment |
/// | ADJUSTMENT_CHUNK_SIZE | 50 | Ledger per-request object limit |
/// | REQUEST_TIMEOUT_MS | 30000 | HTTP timeout (milliseconds) |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// LEDGER_BASE_URL=https://rest.ledger.example LEDGER_CLIENT_ID=... cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Ledger REST base URL
    pub ledger_base_url: String,
    /// OAuth token endpoint
    pub auth_url: String,
    /// OAuth client credentials
    pub client_id: String,
    pub client_secret: String,
    /// Reason code stamped on every adjustment
    pub reason_code: String,
    /// Maximum objects per bulk create call
    pub chunk_size: usize,
    /// HTTP request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        let ledger_base_url =
            std::env::var("LEDGER_BASE_URL").unwrap_or_else(|_| "http://localhost:8089".into());
        let auth_url = std::env::var("LEDGER_AUTH_URL")
            .unwrap_or_else(|_| format!("{}/oauth/token", ledger_base_url.trim_end_matches('/')));

        Self {
            auth_url,
            ledger_base_url,
            client_id: std::env::var("LEDGER_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("LEDGER_CLIENT_SECRET").unwrap_or_default(),
            reason_code: std::env::var("ADJUSTMENT_REASON_CODE")
                .unwrap_or_else(|_| "Write-off".into()),
            chunk_size: std::env::var("ADJUSTMENT_CHUNK_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Reject configurations that can never produce a successful run
    pub fn validate(&self) -> AppResult<()> {
        if self.ledger_base_url.is_empty() {
            return Err(AppError::config("LEDGER_BASE_URL must not be empty"));
        }
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(AppError::config(
                "LEDGER_CLIENT_ID and LEDGER_CLIENT_SECRET must be set",
            ));
        }
        if self.chunk_size == 0 {
            return Err(AppError::config("ADJUSTMENT_CHUNK_SIZE must be at least 1"));
        }
        Ok(())
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
