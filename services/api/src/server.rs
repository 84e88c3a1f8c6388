use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryStore};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cyrano::accounts::AccountService;
use cyrano::analysis::{AnalysisService, AnthropicProvider};
use cyrano::config::AppConfig;
use cyrano::error::AppError;
use cyrano::quiz::QuizService;
use cyrano::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if !config.llm.is_configured() {
        warn!("ANTHROPIC_API_KEY is not set; conversation analysis will return 503");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryStore::default());
    let quiz = Arc::new(QuizService::new(store.clone()));
    let accounts = Arc::new(AccountService::new(
        store.clone(),
        store.clone(),
        config.accounts.clone(),
    ));
    let provider = Arc::new(AnthropicProvider::new(config.llm.clone())?);
    let analysis = Arc::new(AnalysisService::new(store.clone(), store, provider));

    let app = with_service_routes(quiz, accounts, analysis)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, model = %config.llm.model, "cyrano service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
