use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryOrderStore};
use crate::routes::with_order_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use workshop_orders::config::AppConfig;
use workshop_orders::error::AppError;
use workshop_orders::telemetry;
use workshop_orders::workflows::orders::OrderService;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (metrics_layer, metrics_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));

    let order_service = Arc::new(OrderService::new(Arc::new(InMemoryOrderStore::default())));
    let app = with_order_routes(order_service)
        .layer(Extension(AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(metrics_handle),
        }))
        .layer(metrics_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);
    info!(?config.environment, %addr, "workshop order service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
