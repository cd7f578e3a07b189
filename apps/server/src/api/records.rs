//! Asset and liability routes. Both kinds share one set of handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use networth_core::records::{BalanceRecord, RecordForm, RecordKind};

use crate::{
    auth::AuthenticatedUser,
    error::{ApiResult, JsonBody},
    main_lib::AppState,
};

/// Binds a record kind to its URL paths.
trait RecordRoute: Send + Sync + 'static {
    const KIND: RecordKind;
    const COLLECTION: &'static str;
    const ITEM: &'static str;
}

struct Assets;
struct Liabilities;

impl RecordRoute for Assets {
    const KIND: RecordKind = RecordKind::Asset;
    const COLLECTION: &'static str = "/assets";
    const ITEM: &'static str = "/assets/{id}";
}

impl RecordRoute for Liabilities {
    const KIND: RecordKind = RecordKind::Liability;
    const COLLECTION: &'static str = "/liabilities";
    const ITEM: &'static str = "/liabilities/{id}";
}

async fn list_records<R: RecordRoute>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<BalanceRecord>>> {
    let records = state.record_service.list_records(&user.id, R::KIND)?;
    Ok(Json(records))
}

async fn get_record<R: RecordRoute>(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<BalanceRecord>> {
    let record = state.record_service.get_record(&user.id, R::KIND, &id)?;
    Ok(Json(record))
}

async fn create_record<R: RecordRoute>(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    JsonBody(form): JsonBody<RecordForm>,
) -> ApiResult<(StatusCode, Json<BalanceRecord>)> {
    let created = state
        .record_service
        .create_record(&user.id, R::KIND, form)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_record<R: RecordRoute>(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    JsonBody(form): JsonBody<RecordForm>,
) -> ApiResult<Json<BalanceRecord>> {
    let updated = state
        .record_service
        .update_record(&user.id, R::KIND, &id, form)
        .await?;
    Ok(Json(updated))
}

async fn delete_record<R: RecordRoute>(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<StatusCode> {
    state
        .record_service
        .delete_record(&user.id, R::KIND, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn routes_for<R: RecordRoute>() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            R::COLLECTION,
            get(list_records::<R>).post(create_record::<R>),
        )
        .route(
            R::ITEM,
            get(get_record::<R>)
                .put(update_record::<R>)
                .delete(delete_record::<R>),
        )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(routes_for::<Assets>())
        .merge(routes_for::<Liabilities>())
}
