use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use eyre::{Context as _, Result};
use ledger::Ledger;
use log::info;
use tokio::net::TcpListener;
use view::Views;

pub mod api;
pub mod form;
pub mod page;
pub mod view;

#[derive(Clone)]
pub struct AppState {
    ledger: Ledger,
    views: Arc<Views>,
}

impl FromRef<AppState> for Ledger {
    fn from_ref(state: &AppState) -> Ledger {
        state.ledger.clone()
    }
}

impl FromRef<AppState> for Arc<Views> {
    fn from_ref(state: &AppState) -> Arc<Views> {
        state.views.clone()
    }
}

pub fn router(ledger: Ledger) -> Result<Router> {
    let state = AppState {
        ledger,
        views: Arc::new(Views::new()?),
    };
    Ok(Router::new()
        .route("/", get(page::index))
        .route("/records", post(page::submit))
        .merge(api::routes())
        .with_state(state))
}

pub async fn serve(ledger: Ledger, addr: SocketAddr) -> Result<()> {
    let app = router(ledger)?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .await
        .context("Web server stopped")?;
    Ok(())
}
