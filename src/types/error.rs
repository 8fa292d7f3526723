use std::error::Error as StdError;
use thiserror::Error;

/// langpay error types
#[derive(Error, Debug)]
pub enum LangpayError {
    /// Connection failure or non-success HTTP status
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// Missing or invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// Writing the report failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for LangpayError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_decode() {
            Self::Decode(message)
        } else {
            Self::Transport(message)
        }
    }
}

/// Error text followed by every source, joined with ": ".
/// reqwest keeps the actual cause (refused, DNS, TLS, timeout) in `source()`.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    for cause in std::iter::successors(err.source(), |&e| e.source()) {
        let cause = cause.to_string();
        if !message.ends_with(&cause) {
            message.push_str(": ");
            message.push_str(&cause);
        }
    }
    message
}

impl From<serde_json::Error> for LangpayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for langpay
pub type Result<T> = std::result::Result<T, LangpayError>;
