use crate::{
    routes::student::{delete_student, get_student, get_students, post_student, put_student},
    state::RosterState,
};
use axum::{Router, routing::get};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod student;

pub fn build_router(state: RosterState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/student", get(get_students).post(post_student))
        .route(
            "/student/{id}",
            get(get_student).put(put_student).delete(delete_student),
        )
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
