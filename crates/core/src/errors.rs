use thiserror::Error;

/// Unified error type for the entire lira-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Rate source / Network ───────────────────────────────────────
    #[error("Rate source error ({provider}): {message}")]
    RateSource {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid rate for {asset}: {value}")]
    InvalidRate {
        asset: String,
        value: f64,
    },

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Unknown asset type: {0}")]
    UnknownAsset(String),

    #[error("Investment validation failed: {0}")]
    Validation(String),

    #[error("Investment not found: {0}")]
    InvestmentNotFound(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so that
        // endpoint credentials never end up in logs or user-facing text.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
