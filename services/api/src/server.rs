use crate::cli::ServeArgs;
use crate::infra::{build_analysis_service, AnalysisSources, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recruit_ai::config::AppConfig;
use recruit_ai::error::AppError;
use recruit_ai::i18n::{translate, MessageKey};
use recruit_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(model) = args.model.take() {
        config.analysis.model_path = model;
    }
    if let Some(dataset) = args.dataset.take() {
        config.analysis.dataset_path = dataset;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sources = AnalysisSources {
        model_path: &config.analysis.model_path,
        dataset_path: &config.analysis.dataset_path,
        experiences_csv: args.experiences_csv.as_deref(),
        minimum_salary: config.analysis.minimum_salary,
    };
    let analysis_service = match build_analysis_service(&sources) {
        Ok(service) => Arc::new(service),
        Err(err @ AppError::Model(_)) => {
            error!(
                error = %err,
                "{}",
                translate(config.analysis.locale, MessageKey::ModelUnavailable)
            );
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let app = with_operational_routes(analysis_service, config.analysis.locale)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        locale = ?config.analysis.locale,
        minimum_salary = config.analysis.minimum_salary,
        "candidate analysis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
