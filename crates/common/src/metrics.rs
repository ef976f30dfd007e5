//! Process-wide Prometheus registry for HTTP request metrics.

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub static HTTP_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("http_requests_total", "HTTP requests by method and status"),
        &["method", "status"],
    )
    .expect("valid counter opts");
    REGISTRY.register(Box::new(c.clone())).expect("register http_requests_total");
    c
});

pub static HTTP_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    let h = HistogramVec::new(
        HistogramOpts::new("http_request_duration_seconds", "HTTP request latency in seconds"),
        &["method"],
    )
    .expect("valid histogram opts");
    REGISTRY.register(Box::new(h.clone())).expect("register http_request_duration_seconds");
    h
});

/// Record one finished request.
pub fn observe_request(method: &str, status: u16, elapsed_secs: f64) {
    HTTP_REQUESTS.with_label_values(&[method, &status.to_string()]).inc();
    HTTP_LATENCY.with_label_values(&[method]).observe(elapsed_secs);
}

/// Render the registry in Prometheus text exposition format.
pub fn render() -> String {
    Lazy::force(&HTTP_REQUESTS);
    Lazy::force(&HTTP_LATENCY);
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buf) {
        tracing::error!(error = %e, "metrics encode failed");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_requests_show_up_in_render() {
        observe_request("GET", 200, 0.01);
        observe_request("GET", 200, 0.02);
        let text = render();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("method=\"GET\""));
        assert!(text.contains("http_request_duration_seconds"));
    }
}
