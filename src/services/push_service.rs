use crate::adapters::push::{PushError, PushGateway};
use crate::config::PushConfig;
use crate::domain::catalog::DailyMenu;
use crate::domain::notification::{BroadcastKind, DeliveryOutcome, PushEnvelope, PushMessage, PushToken};
use crate::services::catalog_service::CatalogService;
use crate::services::token_registry::TokenRegistry;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use std::sync::Arc;
use time::{Date, OffsetDateTime, UtcOffset};

pub const TEST_TITLE: &str = "Pataky Technikum";
pub const TEST_BODY: &str = "Működik az értesítés! 🚀";
pub const MENU_FALLBACK_TITLE: &str = "🍽️ Mai menü";
pub const MENU_FALLBACK_BODY: &str = "Nézd meg a heti menüt az alkalmazásban!";

#[derive(Clone, Debug)]
pub(crate) struct Metrics {
    pub(crate) tokens_registered_total: Counter<u64>,
    pub(crate) broadcasts_total: Counter<u64>,
    pub(crate) batch_size: Histogram<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("pataky-server");
        Self {
            tokens_registered_total: meter
                .u64_counter("pataky_push_tokens_registered_total")
                .with_description("Token registrations, split by new and already known")
                .build(),
            broadcasts_total: meter
                .u64_counter("pataky_push_broadcasts_total")
                .with_description("Broadcast attempts by kind and outcome")
                .build(),
            batch_size: meter
                .u64_histogram("pataky_push_batch_size")
                .with_description("Number of entries in a gateway batch")
                .build(),
        }
    }
}

/// The fixed message used to check that delivery works end to end.
#[must_use]
pub fn test_message() -> PushMessage {
    PushMessage::new(TEST_TITLE, TEST_BODY)
}

/// Composes the daily menu notification, or the generic one when there is no menu for the day.
#[must_use]
pub fn menu_message(menu: Option<&DailyMenu>) -> PushMessage {
    match menu {
        Some(menu) => PushMessage::new(
            format!("{MENU_FALLBACK_TITLE} – {}", menu.day),
            format!("Leves: {}\nFőétel: {}", menu.soup.name, menu.main_course.name),
        ),
        None => PushMessage::new(MENU_FALLBACK_TITLE, MENU_FALLBACK_BODY),
    }
}

/// Registers push destinations and fans messages out to all of them.
#[derive(Clone, Debug)]
pub struct PushService {
    registry: TokenRegistry,
    gateway: Arc<dyn PushGateway>,
    catalog: CatalogService,
    sound: String,
    menu_offset: UtcOffset,
    metrics: Metrics,
}

impl PushService {
    #[must_use]
    pub fn new(
        registry: TokenRegistry,
        gateway: Arc<dyn PushGateway>,
        catalog: CatalogService,
        config: &PushConfig,
    ) -> Self {
        let menu_offset = UtcOffset::from_hms(config.menu_utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC);
        Self { registry, gateway, catalog, sound: config.sound.clone(), menu_offset, metrics: Metrics::new() }
    }

    /// Makes `token` eligible for every later broadcast. Registering a known token is a no-op.
    pub fn register_token(&self, token: PushToken) -> bool {
        let inserted = self.registry.register(token);
        let status = if inserted { "new" } else { "duplicate" };
        self.metrics.tokens_registered_total.add(1, &[KeyValue::new("status", status)]);
        tracing::debug!(status, registered = self.registry.len(), "Push token registered");
        inserted
    }

    /// Sends `message` to every registered token in one gateway call.
    ///
    /// An empty registry short-circuits to `DeliveryOutcome::NoRecipients` without touching
    /// the gateway.
    ///
    /// # Errors
    /// Returns `PushError` if the gateway call fails or times out. Nothing is retried.
    #[tracing::instrument(
        err(level = "warn"),
        skip_all,
        fields(kind = kind.as_str(), recipients = tracing::field::Empty)
    )]
    pub async fn broadcast(&self, kind: BroadcastKind, message: &PushMessage) -> Result<DeliveryOutcome, PushError> {
        let tokens = self.registry.all();
        tracing::Span::current().record("recipients", tokens.len());

        if tokens.is_empty() {
            tracing::info!("No registered tokens, skipping gateway call");
            self.record(kind, "no_recipients");
            return Ok(DeliveryOutcome::NoRecipients);
        }

        let batch: Vec<PushEnvelope> =
            tokens.iter().map(|token| PushEnvelope::new(token, message, &self.sound)).collect();
        let batch_size = u64::try_from(batch.len()).unwrap_or(u64::MAX);
        self.metrics.batch_size.record(batch_size, &[KeyValue::new("kind", kind.as_str())]);

        match self.gateway.send_batch(&batch).await {
            Ok(response) => {
                tracing::info!(batch_size = batch.len(), "Broadcast accepted by gateway");
                self.record(kind, "delivered");
                Ok(DeliveryOutcome::Delivered(response))
            }
            Err(e) => {
                self.record(kind, "failed");
                Err(e)
            }
        }
    }

    /// Broadcasts the fixed "notifications work" message.
    ///
    /// # Errors
    /// See [`PushService::broadcast`].
    pub async fn send_test_push(&self) -> Result<DeliveryOutcome, PushError> {
        self.broadcast(BroadcastKind::Test, &test_message()).await
    }

    /// Broadcasts the menu for `date`, matched by exact calendar date.
    ///
    /// # Errors
    /// See [`PushService::broadcast`].
    pub async fn send_menu_push_for(&self, date: Date) -> Result<DeliveryOutcome, PushError> {
        let menu = self.catalog.menu_for_date(&date.to_string());
        if menu.is_none() {
            tracing::debug!(%date, "No menu for date, using generic message");
        }
        self.broadcast(BroadcastKind::Menu, &menu_message(menu)).await
    }

    /// Broadcasts today's menu.
    ///
    /// # Errors
    /// See [`PushService::broadcast`].
    pub async fn send_menu_push(&self) -> Result<DeliveryOutcome, PushError> {
        self.send_menu_push_for(self.today()).await
    }

    #[must_use]
    pub fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.menu_offset).date()
    }

    fn record(&self, kind: BroadcastKind, outcome: &'static str) {
        self.metrics
            .broadcasts_total
            .add(1, &[KeyValue::new("kind", kind.as_str()), KeyValue::new("outcome", outcome)]);
    }
}
