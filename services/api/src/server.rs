use crate::cli::ServeArgs;
use crate::infra::{AppState, SuggestionBackend};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use clinicjobs::config::AppConfig;
use clinicjobs::error::AppError;
use clinicjobs::marketplace::catalog::{JsonFileStore, MarketplaceCatalog};
use clinicjobs::marketplace::profile::completion::CompletionEvaluator;
use clinicjobs::marketplace::session::PaymentSimulator;
use clinicjobs::marketplace::MarketplaceService;
use clinicjobs::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = MarketplaceCatalog::seeded()?;
    let store = Arc::new(JsonFileStore::new(config.storage.saved_filters_path()));
    let gateway = SuggestionBackend::from_config(&config.suggestions);
    let service = Arc::new(MarketplaceService::new(
        catalog,
        store,
        gateway,
        CompletionEvaluator::default(),
        PaymentSimulator::default(),
    ));

    let app = with_marketplace_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "clinicjobs marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
