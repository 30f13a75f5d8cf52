use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::json::JsonBody};
use axum::extract::State;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    JsonBody(payload): JsonBody<request::Payload>,
) -> response::Response {
    service(ctx, payload).await
}
