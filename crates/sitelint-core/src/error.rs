use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteLintError>;

/// Failure kinds surfaced by an analysis.
///
/// Only `InvalidInput` ever escapes `Analyzer::analyze`. Fetch-level kinds
/// are folded into a degenerate result, and `EvaluationFault` is contained
/// to the rule that raised it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteLintError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("connection failed: {0}")]
    ConnectionFailure(String),

    #[error("rule {rule_id} failed to evaluate: {message}")]
    EvaluationFault { rule_id: String, message: String },
}

impl SiteLintError {
    /// Status code a caller exposing the engine over HTTP should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            SiteLintError::InvalidInput(_) => 400,
            _ => 500,
        }
    }
}
