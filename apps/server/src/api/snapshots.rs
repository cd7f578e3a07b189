use std::sync::Arc;

use crate::{auth::AuthenticatedUser, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use networth_core::snapshot::{ChartPoint, Snapshot, TimeRange};
use serde_json::{json, Value};

#[derive(serde::Deserialize)]
struct RangeQuery {
    /// One of `6M`, `1Y`, `2Y`, `All`. Defaults to `All`.
    range: Option<String>,
}

impl RangeQuery {
    fn time_range(&self) -> ApiResult<TimeRange> {
        match self.range.as_deref() {
            Some(raw) => Ok(raw.parse::<TimeRange>()?),
            None => Ok(TimeRange::default()),
        }
    }
}

async fn list_snapshots(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(q): Query<RangeQuery>,
) -> ApiResult<Json<Vec<Snapshot>>> {
    let snapshots = state
        .snapshot_service
        .list_snapshots(&user.id, q.time_range()?)?;
    Ok(Json(snapshots))
}

async fn take_snapshot(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Value>> {
    state.snapshot_service.take_snapshot(&user.id).await?;
    Ok(Json(json!({ "success": true })))
}

async fn get_chart(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(q): Query<RangeQuery>,
) -> ApiResult<Json<Vec<ChartPoint>>> {
    let points = state.snapshot_service.chart(&user.id, q.time_range()?)?;
    Ok(Json(points))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/snapshots", get(list_snapshots).post(take_snapshot))
        .route("/snapshots/chart", get(get_chart))
}
