//! Observability handle handed to each transport adapter.
//!
//! Adapters never reach for an ambient logger when reporting failures; they
//! log through the [`Telemetry`] they were constructed with, so every event
//! carries the adapter's span (and therefore its `transport` field).

use std::fmt::Display;

use tracing::Span;

#[derive(Debug, Clone)]
pub struct Telemetry {
    span: Span,
}

impl Telemetry {
    /// Handle scoped to one transport, e.g. `"http"` or `"grpc"`.
    pub fn new(transport: &'static str) -> Self {
        Self {
            span: tracing::info_span!("adapter", transport),
        }
    }

    /// Handle whose events are not attached to any adapter span.
    pub fn disabled() -> Self {
        Self { span: Span::none() }
    }

    /// Log an internal failure with full detail. The caller only ever sees a
    /// generic message.
    pub fn internal_error(&self, operation: &str, detail: &dyn Display) {
        tracing::error!(parent: &self.span, operation, error = %detail, "Internal error");
    }

    /// Note that the caller withdrew a request before it completed.
    pub fn canceled(&self, operation: &str) {
        tracing::debug!(parent: &self.span, operation, "Request canceled by caller");
    }
}
