use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, filters: request::Filters) -> response::Response {
    ctx.wallets
        .wallets(filters)
        .await
        .map(response::Success::Wallets)
        .map_err(response::Error::FailedToFetchWallets)
}
