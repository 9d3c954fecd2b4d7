use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{delete_school, get_school, register_school, school_login, update_school};

pub fn init_schools_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_school))
        .route("/login", post(school_login))
        .route(
            "/{id}",
            get(get_school).put(update_school).delete(delete_school),
        )
}
