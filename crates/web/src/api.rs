use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use ledger::Ledger;
use log::error;
use model::{errors::TrackerError, record::SessionRecord, summary::SummaryView};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/summary", get(summary))
        .route("/api/records", get(records))
        .route("/api/class-types", get(class_types))
}

pub struct ApiError(TrackerError);

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TrackerError::NoDataAvailable => StatusCode::NOT_FOUND,
            err => {
                error!("Request failed: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "message": self.0.brief() }))).into_response()
    }
}

async fn summary(State(ledger): State<Ledger>) -> Result<Json<SummaryView>, ApiError> {
    let agg = ledger.records.summary().await?;
    Ok(Json(agg.view()))
}

async fn records(State(ledger): State<Ledger>) -> Result<Json<Vec<RecordView>>, ApiError> {
    let records = ledger.records.all().await?;
    Ok(Json(records.into_iter().map(RecordView::from).collect()))
}

async fn class_types(State(ledger): State<Ledger>) -> Json<Vec<String>> {
    Json(ledger.class_types.labels().await)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub id: String,
    pub date: String,
    pub duration_minutes: u32,
    pub pay: String,
    pub studio: String,
    pub class_type: String,
    pub students: u32,
}

impl From<SessionRecord> for RecordView {
    fn from(record: SessionRecord) -> Self {
        RecordView {
            id: record.id.to_hex(),
            date: record.day().format("%Y-%m-%d").to_string(),
            duration_minutes: record.duration_minutes,
            pay: record.pay.to_string(),
            studio: record.studio.to_string(),
            class_type: record.class_type,
            students: record.students,
        }
    }
}
