//! Error taxonomy for API calls.
//!
//! Whatever goes wrong on the wire is reduced to one of three shapes,
//! each rendering to a single human-readable message the stores keep.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the transport and resource bindings.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Falha de conexão: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Resposta inesperada do servidor: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub(crate) fn decode(source: serde_json::Error) -> Self {
        ApiError::Decode { source }
    }

    /// Build a `Server` error from a non-2xx response body.
    ///
    /// Prefers the body's `message` (or `error`) field; falls back to the
    /// HTTP status text when the body carries nothing usable.
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("requisição falhou")
                    .to_string()
            });
        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }
}
