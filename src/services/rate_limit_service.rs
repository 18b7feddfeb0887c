use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request, StatusCode};
use ipnetwork::IpNetwork;
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::net::{IpAddr, SocketAddr};
use tower_governor::GovernorError;
use tower_governor::key_extractor::KeyExtractor;

#[derive(Clone, Debug)]
pub struct Metrics {
    pub decisions_total: Counter<u64>,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        let meter = global::meter("pataky-server");
        Self {
            decisions_total: meter
                .u64_counter("pataky_rate_limit_decisions_total")
                .with_description("Governor decisions on rate-limited routes, by tier")
                .build(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Rate-limit key for a request: the client address, with proxy hops peeled off.
///
/// `X-Forwarded-For` is only believed when the TCP peer is one of `trusted_proxies`, so a
/// direct caller cannot pick its own bucket.
#[derive(Clone, Debug)]
pub struct ClientIpExtractor {
    trusted_proxies: Vec<IpNetwork>,
}

impl ClientIpExtractor {
    #[must_use]
    pub const fn new(trusted_proxies: Vec<IpNetwork>) -> Self {
        Self { trusted_proxies }
    }

    #[must_use]
    pub fn client_ip(&self, headers: &HeaderMap, peer_addr: IpAddr) -> IpAddr {
        if !self.is_proxy(peer_addr) {
            return peer_addr;
        }

        // Hops are appended by each proxy, so the nearest untrusted one is the client.
        let forwarded_hops = headers
            .get_all("x-forwarded-for")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .filter_map(|hop| hop.trim().parse::<IpAddr>().ok())
            .collect::<Vec<_>>();

        forwarded_hops.into_iter().rev().find(|hop| !self.is_proxy(*hop)).unwrap_or(peer_addr)
    }

    fn is_proxy(&self, ip: IpAddr) -> bool {
        self.trusted_proxies.iter().any(|net| net.contains(ip))
    }
}

impl KeyExtractor for ClientIpExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let Some(ConnectInfo(peer)) = req.extensions().get::<ConnectInfo<SocketAddr>>() else {
            return Err(GovernorError::UnableToExtractKey);
        };
        Ok(self.client_ip(req.headers(), peer.ip()))
    }
}

#[derive(Clone, Debug)]
pub struct RateLimitService {
    pub extractor: ClientIpExtractor,
    pub metrics: Metrics,
}

impl RateLimitService {
    #[must_use]
    pub fn new(trusted_proxies: Vec<IpNetwork>) -> Self {
        Self { extractor: ClientIpExtractor::new(trusted_proxies), metrics: Metrics::new() }
    }

    /// Returns the label recorded for `status`.
    pub fn log_decision(&self, tier: &'static str, status: StatusCode, retry_after: Option<&str>) -> &'static str {
        let decision = if status == StatusCode::TOO_MANY_REQUESTS { "throttled" } else { "allowed" };
        if decision == "throttled" {
            tracing::warn!(tier, retry_after_secs = retry_after.unwrap_or("unknown"), "Rate limit exceeded");
        }

        self.metrics.decisions_total.add(1, &[KeyValue::new("tier", tier), KeyValue::new("decision", decision)]);
        decision
    }
}
