use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{auth::AuthenticatedUser, error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Extension, Json, Router};
use networth_core::net_worth::NetWorthSummary;
use rust_decimal::Decimal;

async fn get_net_worth(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<NetWorthSummary>> {
    let summary = state.net_worth_service.get_net_worth(&user.id)?;
    Ok(Json(summary))
}

/// Category name to percent of total asset value.
async fn get_allocation(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<BTreeMap<String, Decimal>>> {
    let allocation = state.net_worth_service.get_allocation(&user.id)?;
    Ok(Json(allocation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/net-worth", get(get_net_worth))
        .route("/net-worth/allocation", get(get_allocation))
}
