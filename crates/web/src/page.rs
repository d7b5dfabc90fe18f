use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use ledger::Ledger;
use log::{debug, error, warn};
use model::{errors::TrackerError, status::StatusMessage, summary::SummaryView};

use crate::{
    form::RecordForm,
    view::{Page, Views},
};

pub(crate) async fn index(
    State(ledger): State<Ledger>,
    State(views): State<Arc<Views>>,
) -> Response {
    render(&ledger, &views, Vec::new()).await
}

pub(crate) async fn submit(
    State(ledger): State<Ledger>,
    State(views): State<Arc<Views>>,
    Form(form): Form<RecordForm>,
) -> Response {
    let class_types = ledger.class_types.labels().await;
    let status = match form.validate(&class_types) {
        Ok(record) => match ledger.records.insert(&record).await {
            Ok(id) => {
                debug!("saved record {} from form", id);
                StatusMessage::success("Record saved.")
            }
            Err(err) => StatusMessage::error(format!("Failed to save record: {}", err.brief())),
        },
        Err(err) => {
            warn!("Rejected form: {}", err);
            StatusMessage::warning(err.to_string())
        }
    };
    render(&ledger, &views, vec![status]).await
}

async fn render(ledger: &Ledger, views: &Views, mut statuses: Vec<StatusMessage>) -> Response {
    let summary = match ledger.records.summary().await {
        Ok(agg) => Some(SummaryView::from(agg)),
        Err(TrackerError::NoDataAvailable) => {
            statuses.push(StatusMessage::info("No records yet."));
            None
        }
        Err(err) => {
            error!("Failed to load summary: {:#}", err);
            statuses.push(StatusMessage::error(format!(
                "The app has encountered an error: {}",
                err.brief()
            )));
            None
        }
    };
    let class_types = ledger.class_types.labels().await;
    let page = Page {
        statuses: &statuses,
        summary: summary.as_ref(),
        class_types: &class_types,
    };
    match views.page(&page) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Failed to render page: {:#}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
