use clap::{Args, Parser, ValueEnum};
use ipnetwork::IpNetwork;

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub push: PushConfig,

    #[command(flatten)]
    pub rate_limit: RateLimitConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "PATAKY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the public API
    #[arg(long, env = "PATAKY_PORT", default_value_t = 8001)]
    pub port: u16,

    /// Port for liveness and readiness probes
    #[arg(long, env = "PATAKY_MGMT_PORT", default_value_t = 9090)]
    pub mgmt_port: u16,

    /// How long to wait for in-flight requests on shutdown
    #[arg(long, env = "PATAKY_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,

    /// Upper bound on the time spent serving a single request
    #[arg(long, env = "PATAKY_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Comma-separated list of CIDRs to trust for X-Forwarded-For IP extraction
    #[arg(
        long,
        env = "PATAKY_TRUSTED_PROXIES",
        default_value = "10.0.0.0/8,172.16.0.0/12,192.168.0.0/16,127.0.0.1/32",
        value_delimiter = ','
    )]
    pub trusted_proxies: Vec<IpNetwork>,
}

#[derive(Clone, Debug, Args)]
pub struct PushConfig {
    /// Batch send endpoint of the push gateway
    #[arg(long = "push-gateway-url", env = "PATAKY_PUSH_GATEWAY_URL", default_value = "https://exp.host/--/api/v2/push/send")]
    pub gateway_url: String,

    /// Optional bearer token sent to the push gateway
    #[arg(long = "push-access-token", env = "PATAKY_PUSH_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    /// Timeout for a single gateway call
    #[arg(long = "push-timeout-secs", env = "PATAKY_PUSH_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Notification sound attached to every message
    #[arg(long = "push-sound", env = "PATAKY_PUSH_SOUND", default_value = "default")]
    pub sound: String,

    /// UTC offset in hours used to decide which day's menu is "today"
    #[arg(
        long = "menu-utc-offset-hours",
        env = "PATAKY_MENU_UTC_OFFSET_HOURS",
        default_value_t = 1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i8).range(-25..=25)
    )]
    pub menu_utc_offset_hours: i8,
}

#[derive(Clone, Debug, Args)]
pub struct RateLimitConfig {
    /// Requests per second allowed for standard endpoints
    #[arg(long, env = "PATAKY_RATE_LIMIT_PER_SECOND", default_value_t = 50)]
    pub per_second: u32,

    /// Burst allowance for standard endpoints
    #[arg(long, env = "PATAKY_RATE_LIMIT_BURST", default_value_t = 100)]
    pub burst: u32,

    /// Stricter rate limit for the broadcast triggers
    #[arg(long, env = "PATAKY_PUSH_RATE_LIMIT_PER_SECOND", default_value_t = 1)]
    pub push_per_second: u32,

    /// Burst allowance for the broadcast triggers
    #[arg(long, env = "PATAKY_PUSH_RATE_LIMIT_BURST", default_value_t = 3)]
    pub push_burst: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "PATAKY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces and metrics are exported only when set
    #[arg(long, env = "PATAKY_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
