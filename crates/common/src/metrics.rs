//! Process-wide Prometheus registry.
//!
//! Handlers record one sample per CRUD call, labelled by service, operation
//! and outcome. `/metrics` renders the registry in text exposition format.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use tracing::warn;

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub static CRUD_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new("crud_requests_total", "CRUD calls handled, by outcome"),
        &["service", "operation", "outcome"],
    )
    // only fails on an invalid static name or label set
    .expect("crud_requests_total definition");
    if let Err(e) = REGISTRY.register(Box::new(counter.clone())) {
        warn!(error = %e, "crud_requests_total already registered");
    }
    counter
});

/// Count one finished call.
pub fn record(service: &str, operation: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    CRUD_REQUESTS.with_label_values(&[service, operation, outcome]).inc();
}

/// Render every registered metric; encoding failures yield an empty body.
pub fn render() -> String {
    // touch the counter so the family is always present in the output
    Lazy::force(&CRUD_REQUESTS);
    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&REGISTRY.gather(), &mut buf) {
        warn!(error = %e, "metrics encoding failed");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_calls_show_up_in_exposition() {
        record("clients", "create", true);
        record("clients", "create", false);
        let text = render();
        assert!(text.contains("crud_requests_total"));
        assert!(text.contains("operation=\"create\""));
        assert!(text.contains("outcome=\"error\""));
    }
}
