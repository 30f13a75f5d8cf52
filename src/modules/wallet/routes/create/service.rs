use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let wallet = ctx
        .wallets
        .create_wallet(payload)
        .await
        .map_err(response::Error::WalletCreationFailed)?;

    tracing::info!("Created wallet {} for user {}", wallet.id, wallet.user_id);

    Ok(response::Success::WalletCreated(wallet))
}
