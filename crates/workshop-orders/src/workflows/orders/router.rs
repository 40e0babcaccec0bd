use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::OrderDraft;
use super::repository::{OrderStore, StoreError};
use super::service::{OrderService, OrderServiceError};
use crate::workflows::inspection::ChecklistSnapshot;
use crate::workflows::report::{
    compile_checklist_report, compile_evidence_report, compile_order_report, ClientVehicleSummary,
};

/// Router builder exposing the order lifecycle and report compilation
/// endpoints.
pub fn order_router<S>(service: Arc<OrderService<S>>) -> Router
where
    S: OrderStore + 'static,
{
    Router::new()
        .route("/api/v1/orders", post(create_handler::<S>))
        .route("/api/v1/orders", get(list_handler::<S>))
        .route("/api/v1/orders/:folio", get(find_handler::<S>))
        .route("/api/v1/orders/:folio", delete(delete_handler::<S>))
        .route("/api/v1/orders/:folio/total", put(set_total_handler::<S>))
        .route(
            "/api/v1/orders/:folio/finalize",
            post(finalize_handler::<S>),
        )
        .route("/api/v1/reports/order", post(order_report_handler::<S>))
        .route("/api/v1/reports/checklist", post(checklist_report_handler))
        .route("/api/v1/reports/evidence", post(evidence_report_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TotalRequest {
    pub(crate) amount: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderReportRequest {
    pub(crate) folio: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChecklistReportRequest {
    #[serde(default)]
    pub(crate) snapshot: Option<ChecklistSnapshot>,
    #[serde(default)]
    pub(crate) info: ClientVehicleSummary,
    #[serde(default)]
    pub(crate) general_observations: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvidenceReportRequest {
    pub(crate) snapshot: ChecklistSnapshot,
    #[serde(default)]
    pub(crate) client_name: Option<String>,
}

async fn create_handler<S>(
    State(service): State<Arc<OrderService<S>>>,
    Json(draft): Json<OrderDraft>,
) -> Response
where
    S: OrderStore + 'static,
{
    match service.create(draft).await {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

async fn list_handler<S>(State(service): State<Arc<OrderService<S>>>) -> Response
where
    S: OrderStore + 'static,
{
    match service.list().await {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

async fn find_handler<S>(
    State(service): State<Arc<OrderService<S>>>,
    Path(folio): Path<String>,
) -> Response
where
    S: OrderStore + 'static,
{
    match service.find_by_folio(&folio).await {
        Ok(draft) => (StatusCode::OK, Json(json!({ "folio": folio, "draft": draft })))
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn set_total_handler<S>(
    State(service): State<Arc<OrderService<S>>>,
    Path(folio): Path<String>,
    Json(request): Json<TotalRequest>,
) -> Response
where
    S: OrderStore + 'static,
{
    match service.set_total(&folio, request.amount).await {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

async fn finalize_handler<S>(
    State(service): State<Arc<OrderService<S>>>,
    Path(folio): Path<String>,
) -> Response
where
    S: OrderStore + 'static,
{
    match service.finalize(&folio).await {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_handler<S>(
    State(service): State<Arc<OrderService<S>>>,
    Path(folio): Path<String>,
) -> Response
where
    S: OrderStore + 'static,
{
    match service.delete(&folio).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn order_report_handler<S>(
    State(service): State<Arc<OrderService<S>>>,
    Json(request): Json<OrderReportRequest>,
) -> Response
where
    S: OrderStore + 'static,
{
    match service.get(&request.folio).await {
        Ok(record) => (StatusCode::OK, Json(compile_order_report(&record))).into_response(),
        Err(err) => error_response(err),
    }
}

async fn checklist_report_handler(Json(request): Json<ChecklistReportRequest>) -> Response {
    let snapshot = request.snapshot.unwrap_or_default();
    let document =
        compile_checklist_report(&snapshot, &request.info, &request.general_observations);
    (StatusCode::OK, Json(document)).into_response()
}

async fn evidence_report_handler(Json(request): Json<EvidenceReportRequest>) -> Response {
    let document =
        compile_evidence_report(&request.snapshot, request.client_name.as_deref());
    (StatusCode::OK, Json(document)).into_response()
}

/// Single mapping from the lifecycle error taxonomy to HTTP statuses.
fn error_response(err: OrderServiceError) -> Response {
    match err {
        OrderServiceError::Validation(violations) => {
            let payload = json!({
                "error": "draft validation failed",
                "violations": violations
                    .iter()
                    .map(|violation| violation.to_string())
                    .collect::<Vec<_>>(),
                "codes": violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        OrderServiceError::Guard(violation) => {
            let payload = json!({ "error": violation.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        OrderServiceError::NotFound | OrderServiceError::Store(StoreError::NotFound) => {
            let payload = json!({ "error": "order not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        OrderServiceError::Store(StoreError::Rejected(reason)) => {
            let payload = json!({ "error": reason });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        OrderServiceError::Store(StoreError::Unavailable(reason)) => {
            let payload = json!({ "error": reason });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
