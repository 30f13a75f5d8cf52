use super::store::Storer;
use crate::utils::database::DatabaseConnection;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Wallet {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateWalletPayload {
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateWalletPayload {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub wallet_name: String,
    pub wallet_type: String,
    pub balance: f64,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Filters {
    pub wallet_type: Option<String>,
}

impl Filters {
    /// An empty `wallet_type` means no filter.
    pub fn wallet_type(&self) -> Option<&str> {
        self.wallet_type.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wallet not found for user id: {0}")]
    NoWalletsForUser(String),
    #[error("Wallet not found for id: {0}")]
    WalletNotFound(i32),
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoWalletsForUser(_) | Self::WalletNotFound(_))
    }
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    filters: &Filters,
) -> Result<Vec<Wallet>, Error> {
    sqlx::query_as::<_, Wallet>(
        "
        SELECT id, user_id, user_name, wallet_name, wallet_type, balance, created_at
        FROM user_wallet
        WHERE wallet_type = COALESCE($1, wallet_type)
        ORDER BY id
        ",
    )
    .bind(filters.wallet_type().map(str::to_string))
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many wallets: {}", err);
        Error::Store(err)
    })
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateWalletPayload,
) -> Result<Wallet, Error> {
    sqlx::query_as::<_, Wallet>(
        "
        INSERT INTO user_wallet (user_id, user_name, wallet_name, wallet_type, balance)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, user_name, wallet_name, wallet_type, balance, created_at
        ",
    )
    .bind(payload.user_id)
    .bind(payload.user_name)
    .bind(payload.wallet_name)
    .bind(payload.wallet_type)
    .bind(payload.balance)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a wallet: {}", err);
        Error::Store(err)
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    payload: UpdateWalletPayload,
) -> Result<Wallet, Error> {
    let id = payload.id;

    sqlx::query_as::<_, Wallet>(
        "
        UPDATE user_wallet SET
            user_id = $1,
            user_name = $2,
            wallet_name = $3,
            wallet_type = $4,
            balance = $5
        WHERE
            id = $6
        RETURNING id, user_id, user_name, wallet_name, wallet_type, balance, created_at
        ",
    )
    .bind(payload.user_id)
    .bind(payload.user_name)
    .bind(payload.wallet_name)
    .bind(payload.wallet_type)
    .bind(payload.balance)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a wallet by id {}: {}",
            id,
            err
        );
        Error::Store(err)
    })?
    .ok_or(Error::WalletNotFound(id))
}

/// Removes every wallet owned by `user_id` and returns how many were removed.
///
/// A single statement decides both existence and removal, so a user with no
/// wallets fails with [`Error::NoWalletsForUser`] without touching the table.
pub async fn delete_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: &str) -> Result<u64, Error> {
    let result = sqlx::query("DELETE FROM user_wallet WHERE user_id = CAST($1 AS INTEGER)")
        .bind(user_id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete wallets by user id {}: {}",
                user_id,
                err
            );
            Error::Store(err)
        })?;

    match result.rows_affected() {
        0 => Err(Error::NoWalletsForUser(user_id.to_string())),
        deleted => Ok(deleted),
    }
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: &str,
) -> Result<Vec<Wallet>, Error> {
    sqlx::query_as::<_, Wallet>(
        "
        SELECT id, user_id, user_name, wallet_name, wallet_type, balance, created_at
        FROM user_wallet
        WHERE user_id = CAST($1 AS INTEGER)
        ORDER BY id
        ",
    )
    .bind(user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching wallets for user id {}: {}",
            user_id,
            err
        );
        Error::Store(err)
    })
}

/// PostgreSQL-backed [`Storer`].
#[derive(Clone)]
pub struct Repository {
    db_conn: DatabaseConnection,
}

impl Repository {
    pub fn new(db_conn: DatabaseConnection) -> Self {
        Self { db_conn }
    }
}

#[async_trait]
impl Storer for Repository {
    async fn wallets(&self, filters: Filters) -> Result<Vec<Wallet>, Error> {
        find_many(&self.db_conn.pool, &filters).await
    }

    async fn create_wallet(&self, payload: CreateWalletPayload) -> Result<Wallet, Error> {
        create(&self.db_conn.pool, payload).await
    }

    async fn update_wallet(&self, payload: UpdateWalletPayload) -> Result<Wallet, Error> {
        update_by_id(&self.db_conn.pool, payload).await
    }

    async fn delete_wallets_by_user_id(&self, user_id: String) -> Result<u64, Error> {
        delete_by_user_id(&self.db_conn.pool, &user_id).await
    }

    async fn wallets_by_user_id(&self, user_id: String) -> Result<Vec<Wallet>, Error> {
        find_many_by_user_id(&self.db_conn.pool, &user_id).await
    }
}
