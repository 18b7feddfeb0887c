#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod telemetry;

use crate::adapters::push::PushGateway;
use crate::adapters::push::expo::ExpoPushGateway;
use crate::api::ServiceContainer;
use crate::config::Config;
use crate::services::catalog_service::CatalogService;
use crate::services::health_service::HealthService;
use crate::services::push_service::PushService;
use crate::services::rate_limit_service::RateLimitService;
use crate::services::token_registry::TokenRegistry;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug)]
pub struct App {
    pub services: ServiceContainer,
    pub health_service: HealthService,
}

/// Wires the application's services together.
#[derive(Debug)]
pub struct AppBuilder {
    config: Config,
    push_gateway: Option<Arc<dyn PushGateway>>,
}

impl AppBuilder {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config, push_gateway: None }
    }

    /// Overrides the push gateway. Without this the Expo client from the config is used.
    #[must_use]
    pub fn with_push_gateway(mut self, gateway: Arc<dyn PushGateway>) -> Self {
        self.push_gateway = Some(gateway);
        self
    }

    /// Builds the services. The token registry starts empty.
    ///
    /// # Errors
    /// Returns an error if the default push gateway client cannot be built.
    pub fn build(self) -> anyhow::Result<App> {
        let gateway: Arc<dyn PushGateway> = match self.push_gateway {
            Some(gateway) => gateway,
            None => Arc::new(ExpoPushGateway::new(&self.config.push)?),
        };

        let registry = TokenRegistry::new();
        let catalog = CatalogService::new();
        let push_service = PushService::new(registry.clone(), gateway, catalog, &self.config.push);
        let rate_limit_service = RateLimitService::new(self.config.server.trusted_proxies.clone());

        Ok(App {
            services: ServiceContainer { catalog, push_service, rate_limit_service },
            health_service: HealthService::new(registry),
        })
    }
}

/// Flips `shutdown_tx` on Ctrl-C or SIGTERM.
pub fn spawn_signal_handler(shutdown_tx: watch::Sender<bool>) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for SIGTERM");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
            () = terminate => tracing::info!("Received SIGTERM, shutting down"),
        }

        let _ = shutdown_tx.send(true);
    });
}

/// Routes panics through `tracing` so they reach the configured log output.
pub fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map(ToString::to_string).unwrap_or_default();
        tracing::error!(panic = %info, %location, "Panic occurred");
    }));
}
