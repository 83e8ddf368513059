//! Qualifying report handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Report routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report", get(handler::ranked_report))
        .route("/report/", get(handler::ranked_report))
        .route("/report/text", get(handler::text_report))
        .route("/report/summary", get(handler::load_summary))
        .route("/report/reload", post(handler::reload))
        .route("/report/drivers", get(handler::list_drivers))
        .route("/report/drivers/", get(handler::list_drivers))
        .route("/report/drivers/{driver_id}", get(handler::get_driver))
}
