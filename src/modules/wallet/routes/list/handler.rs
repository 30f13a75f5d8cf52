use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{Query, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Query(filters): Query<request::Filters>,
) -> response::Response {
    service(ctx, filters).await
}
