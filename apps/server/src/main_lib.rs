use std::sync::Arc;

use crate::{auth::AuthManager, config::Config};
use networth_core::{
    net_worth::{NetWorthService, NetWorthServiceTrait},
    records::{RecordService, RecordServiceTrait},
    snapshot::{SnapshotService, SnapshotServiceTrait},
};
use networth_storage_sqlite::{
    db::{self, write_actor},
    RecordRepository, SnapshotRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub record_service: Arc<dyn RecordServiceTrait>,
    pub net_worth_service: Arc<dyn NetWorthServiceTrait>,
    pub snapshot_service: Arc<dyn SnapshotServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("NW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // init() also installs the log bridge, so the library crates' `log`
    // records end up here
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let record_repo = Arc::new(RecordRepository::new(pool.clone(), writer.clone()));
    let snapshot_repo = Arc::new(SnapshotRepository::new(pool.clone(), writer));

    let record_service: Arc<dyn RecordServiceTrait> = Arc::new(RecordService::new(record_repo));
    let net_worth_service = Arc::new(NetWorthService::new(record_service.clone()));
    let snapshot_service = Arc::new(SnapshotService::new(snapshot_repo));

    let auth = Arc::new(AuthManager::new(
        &config.jwt_secret,
        config.jwt_audience.as_deref(),
        &config.auth_redirect,
    ));

    Ok(Arc::new(AppState {
        record_service,
        net_worth_service,
        snapshot_service,
        auth,
    }))
}
