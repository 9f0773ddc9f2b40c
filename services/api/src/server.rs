use crate::cli::ServeArgs;
use crate::infra::{default_engine, AppState};
use crate::routes::with_styling_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use wardrobe_ai::config::ServiceConfig;
use wardrobe_ai::error::AppError;
use wardrobe_ai::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = ServiceConfig::load()?;

    if let Some(host) = args.host.take() {
        config.http.host = host;
    }
    if let Some(port) = args.port.take() {
        config.http.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(default_engine());

    let app = with_styling_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.http.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.stage, %addr, "wardrobe stylist ready");

    axum::serve(listener, app).await?;
    Ok(())
}
