use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let deleted = ctx
        .wallets
        .delete_wallets_by_user_id(payload.id.clone())
        .await
        .map_err(response::Error::FailedToDeleteWallets)?;

    tracing::info!("Deleted {} wallet(s) for user {}", deleted, payload.id);

    Ok(response::Success::WalletsDeleted)
}
