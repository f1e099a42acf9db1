//! Error envelope rendering
//!
//! Every failure leaving the API becomes a `{error, stack?, details?}` JSON
//! body. The diagnostics fields exist only outside production, and every
//! 5xx is handed to the operational log sink before the response is built.
//! Both the environment and the sink are injected at construction so the
//! behaviour is fixed per instance, never read from ambient process state.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::types::Environment;
use crate::Error;

/// Wire shape of every failure response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// A rendered failure, ready to leave the handler
#[derive(Debug)]
pub struct Rejection {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl Rejection {
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            body: ErrorBody {
                error: Error::MethodNotAllowed.to_string(),
                stack: None,
                details: None,
            },
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Structured record handed to the operational log sink
#[derive(Debug)]
pub struct ErrorRecord<'a> {
    pub status: StatusCode,
    pub message: &'a str,
    pub detail: &'a str,
}

/// Operational log sink for server-side failures
pub trait ErrorSink: Send + Sync {
    fn record(&self, record: &ErrorRecord<'_>);
}

/// Default sink: structured event on the `tracing` error level
#[derive(Debug, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record(&self, record: &ErrorRecord<'_>) {
        tracing::error!(
            status = record.status.as_u16(),
            error = record.message,
            detail = record.detail,
            "request failed"
        );
    }
}

/// The envelope unit shared by all handlers
#[derive(Clone)]
pub struct Envelope {
    environment: Environment,
    sink: Arc<dyn ErrorSink>,
}

impl Envelope {
    pub fn new(environment: Environment, sink: Arc<dyn ErrorSink>) -> Self {
        Self { environment, sink }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Map a failure to its response. Client errors pass their message
    /// through untouched; server errors are logged and, in production,
    /// redacted down to a generic message with no diagnostics.
    pub fn reject(&self, err: Error) -> Rejection {
        let status = err.status_code();
        if !status.is_server_error() {
            return Rejection {
                status,
                body: ErrorBody {
                    error: err.to_string(),
                    stack: None,
                    details: None,
                },
            };
        }

        let message = err.to_string();
        let detail = format!("{err:?}");
        self.sink.record(&ErrorRecord {
            status,
            message: &message,
            detail: &detail,
        });

        let body = if self.environment.is_production() {
            ErrorBody {
                error: "Internal server error".to_string(),
                stack: None,
                details: None,
            }
        } else {
            ErrorBody {
                error: message,
                stack: Some(source_chain(&err)),
                details: Some(json!({ "debug": detail })),
            }
        };

        Rejection { status, body }
    }
}

/// Render an error and its source chain, one cause per line.
fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
