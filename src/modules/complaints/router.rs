use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_complaint, get_complaints};

pub fn init_complaints_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_complaint))
        .route("/school/{school_id}", get(get_complaints))
}
