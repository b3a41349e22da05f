use tracing::warn;

/// Destination for failure events from the fetch pipeline.
///
/// Sinks are fire-and-forget: implementations must not block or fail. They
/// are called from spawned fetch tasks, so they have to be `Send + Sync`.
pub trait DiagnosticsSink: Send + Sync {
    /// Records a named event.
    fn event(&self, name: &str) {
        self.event_with(name, &[]);
    }

    /// Records a named event with string-keyed attributes.
    fn event_with(&self, name: &str, attributes: &[(&str, &str)]);
}

/// Default sink: forwards events to the `tracing` subscriber as warnings.
pub struct TracingDiagnosticsSink;

impl DiagnosticsSink for TracingDiagnosticsSink {
    fn event_with(&self, name: &str, attributes: &[(&str, &str)]) {
        if attributes.is_empty() {
            warn!("{}", name);
        } else {
            warn!(?attributes, "{}", name);
        }
    }
}

/// Discards every event. Useful when a consumer does not report diagnostics,
/// and in tests of downstream code.
pub struct NoopDiagnosticsSink;

impl DiagnosticsSink for NoopDiagnosticsSink {
    fn event_with(&self, _name: &str, _attributes: &[(&str, &str)]) {}
}
