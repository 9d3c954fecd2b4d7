use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::classes::router::init_classes_router;
use crate::modules::complaints::router::init_complaints_router;
use crate::modules::notices::router::init_notices_router;
use crate::modules::schools::router::init_schools_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/api",
            Router::new()
                .nest("/schools", init_schools_router())
                .nest("/classes", init_classes_router())
                .nest("/subjects", init_subjects_router())
                .nest("/teachers", init_teachers_router())
                .nest("/students", init_students_router())
                .nest("/notices", init_notices_router())
                .nest("/complaints", init_complaints_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
