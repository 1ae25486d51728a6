//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::api::health;
use crate::core::ServerState;

/// Employee router
///
/// The static routes (`search`, `avg-salary`, `department-stats`, `health`)
/// coexist with the `{employee_id}` capture; the router matches statics first.
pub fn router() -> Router<ServerState> {
    routes()
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/employees/", get(handler::list).post(handler::create))
        .route("/employees/search/", get(handler::search_by_skill))
        .route("/employees/avg-salary/", get(handler::average_salary))
        .route(
            "/employees/department-stats/",
            get(handler::department_statistics),
        )
        .route("/employees/health/", get(health::health))
        .route(
            "/employees/{employee_id}/",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
