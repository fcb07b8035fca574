use crate::cli::ServeArgs;
use crate::infra::{load_cities, AppState};
use crate::routes::with_ops_routes;
use address_validation::config::AppConfig;
use address_validation::error::AppError;
use address_validation::telemetry;
use address_validation::validation::AddressValidationService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(cities) = args.cities.take() {
        config.reference_data.cities_path = cities;
    }

    telemetry::init(&config.telemetry)?;

    let cities = load_cities(&config.reference_data.cities_path)?;
    let service = Arc::new(AddressValidationService::new(Arc::new(cities)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_ops_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "address validation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
