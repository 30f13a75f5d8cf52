use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.wallets
        .update_wallet(payload)
        .await
        .map(response::Success::WalletUpdated)
        .map_err(response::Error::FailedToUpdateWallet)
}
