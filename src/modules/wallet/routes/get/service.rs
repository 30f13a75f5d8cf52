use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.wallets
        .wallets_by_user_id(payload.id)
        .await
        .map(response::Success::Wallets)
        .map_err(response::Error::FailedToFetchWallets)
}
