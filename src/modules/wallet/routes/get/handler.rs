use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(payload): Path<request::Payload>,
) -> response::Response {
    service(ctx, payload).await
}
