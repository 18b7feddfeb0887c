use crate::services::token_registry::TokenRegistry;
use opentelemetry::{global, metrics::Gauge};

#[derive(Clone, Debug)]
pub struct Metrics {
    pub registered_tokens: Gauge<u64>,
}

impl Metrics {
    #[must_use]
    pub(crate) fn new() -> Self {
        let meter = global::meter("pataky-server");
        Self {
            registered_tokens: meter
                .u64_gauge("pataky_push_registered_tokens")
                .with_description("Number of push tokens currently known")
                .build(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Readiness data for the management endpoints.
#[derive(Clone, Debug)]
pub struct HealthService {
    registry: TokenRegistry,
    metrics: Metrics,
}

impl HealthService {
    #[must_use]
    pub fn new(registry: TokenRegistry) -> Self {
        Self { registry, metrics: Metrics::new() }
    }

    /// Number of registered tokens. Also published as a gauge.
    #[must_use]
    pub fn registered_tokens(&self) -> usize {
        let count = self.registry.len();
        self.metrics.registered_tokens.record(u64::try_from(count).unwrap_or(u64::MAX), &[]);
        count
    }
}
