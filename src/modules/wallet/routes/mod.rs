mod create;
mod delete;
mod get;
mod list;
mod update;

use super::repository;
use crate::{types::Context, utils::json};
use axum::{
    http::StatusCode,
    response::Response,
    routing::{get, Router},
};
use std::sync::Arc;

fn error_response(err: repository::Error) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    json::message(status, err)
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/wallets",
            get(list::handler)
                .post(create::handler)
                .put(update::handler),
        )
        .route(
            "/users/:id/wallets",
            get(get::handler).delete(delete::handler),
        )
}
