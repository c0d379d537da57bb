use crate::cli::ServeArgs;
use crate::demo::{demo_history, demo_roster};
use crate::infra::{default_scoring_config, AppState, InMemoryAgentDirectory, InMemoryHistoryStore};
use crate::routes::with_dispatch_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use custodia::config::{AppConfig, GazetteerTablesConfig};
use custodia::dispatch::{gazetteer, DispatchService, Gazetteer};
use custodia::error::AppError;
use custodia::telemetry;
use std::fs::File;
use std::sync::atomic::Ordering;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(InMemoryAgentDirectory::seeded(demo_roster()));
    let history = Arc::new(InMemoryHistoryStore::seeded(demo_history()));
    let gazetteer = Arc::new(load_gazetteer(&config.gazetteer)?);
    let dispatch_service = Arc::new(DispatchService::new(
        directory,
        history,
        gazetteer,
        default_scoring_config(),
    ));

    let app = with_dispatch_routes(dispatch_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "custodian dispatch service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn load_gazetteer(tables: &GazetteerTablesConfig) -> Result<Gazetteer, AppError> {
    match (&tables.places_csv, &tables.zones_csv) {
        (Some(places), Some(zones)) => {
            let gazetteer = Gazetteer::from_csv_readers(File::open(places)?, File::open(zones)?)?;
            info!(places = gazetteer.len(), "loaded gazetteer tables from csv");
            Ok(gazetteer)
        }
        _ => Ok(gazetteer::builtin()),
    }
}
