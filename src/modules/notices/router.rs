use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{create_notice, delete_notice, delete_notices, get_notices, update_notice};

pub fn init_notices_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_notice))
        .route(
            "/school/{school_id}",
            get(get_notices).delete(delete_notices),
        )
        .route("/{id}", put(update_notice).delete(delete_notice))
}
