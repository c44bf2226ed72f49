//! Client error taxonomy.
//!
//! Three failure classes at the gateway boundary: transport failures,
//! non-2xx API responses (the body is surfaced verbatim — the backend
//! sends plain-text diagnostics), and body-decode failures. All carry the
//! endpoint that failed.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the compliance backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("request to {endpoint} failed: {source}")]
    Http {
        /// The operation that failed (e.g. `"GET /api/compliance/AE"`).
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("API error {status} on {endpoint}: {body}")]
    Api {
        /// The operation that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body did not decode into the expected shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        /// The operation that failed.
        endpoint: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// Client construction/configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_body_verbatim() {
        let err = ApiError::Api {
            endpoint: "POST /api/compliance/AE/push".to_string(),
            status: 404,
            body: "Regulation REG-9 not found".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("404"));
        assert!(msg.contains("Regulation REG-9 not found"));
    }
}
