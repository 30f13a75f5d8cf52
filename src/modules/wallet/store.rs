use super::repository::{CreateWalletPayload, Error, Filters, UpdateWalletPayload, Wallet};
use async_trait::async_trait;

/// Wallet operations the HTTP layer depends on.
///
/// [`super::repository::Repository`] is the PostgreSQL implementation; tests
/// swap in [`memory::MemoryStore`].
#[async_trait]
pub trait Storer: Send + Sync {
    /// All wallets, or only those whose `wallet_type` matches the filter exactly.
    async fn wallets(&self, filters: Filters) -> Result<Vec<Wallet>, Error>;

    /// Inserts a wallet and returns the stored row with its assigned `id` and `created_at`.
    async fn create_wallet(&self, payload: CreateWalletPayload) -> Result<Wallet, Error>;

    /// Overwrites every scalar field of the wallet with `payload.id`. `created_at` is kept.
    async fn update_wallet(&self, payload: UpdateWalletPayload) -> Result<Wallet, Error>;

    async fn delete_wallets_by_user_id(&self, user_id: String) -> Result<u64, Error>;

    async fn wallets_by_user_id(&self, user_id: String) -> Result<Vec<Wallet>, Error>;
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    pub fn created_at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    pub fn wallet(id: i32, user_id: i32, wallet_type: &str) -> Wallet {
        Wallet {
            id,
            user_id,
            user_name: format!("user{user_id}"),
            wallet_name: format!("user{user_id} wallet"),
            wallet_type: wallet_type.to_string(),
            balance: 1000.0,
            created_at: created_at(),
        }
    }

    /// In-memory store; `failing()` makes every call return a store error.
    #[derive(Default)]
    pub struct MemoryStore {
        wallets: Mutex<Vec<Wallet>>,
        fail: bool,
    }

    impl MemoryStore {
        pub fn with_wallets(wallets: Vec<Wallet>) -> Self {
            Self {
                wallets: Mutex::new(wallets),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                wallets: Mutex::new(vec![]),
                fail: true,
            }
        }

        pub fn snapshot(&self) -> Vec<Wallet> {
            self.wallets.lock().unwrap().clone()
        }

        fn check(&self) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Store(sqlx::Error::Protocol(
                    "connection refused".to_string(),
                )));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Storer for MemoryStore {
        async fn wallets(&self, filters: Filters) -> Result<Vec<Wallet>, Error> {
            self.check()?;
            Ok(self
                .snapshot()
                .into_iter()
                .filter(|w| filters.wallet_type().map_or(true, |t| w.wallet_type == t))
                .collect())
        }

        async fn create_wallet(&self, payload: CreateWalletPayload) -> Result<Wallet, Error> {
            self.check()?;
            let mut wallets = self.wallets.lock().unwrap();
            let id = wallets.iter().map(|w| w.id).max().unwrap_or(0) + 1;
            let wallet = Wallet {
                id,
                user_id: payload.user_id,
                user_name: payload.user_name,
                wallet_name: payload.wallet_name,
                wallet_type: payload.wallet_type,
                balance: payload.balance,
                created_at: created_at(),
            };
            wallets.push(wallet.clone());
            Ok(wallet)
        }

        async fn update_wallet(&self, payload: UpdateWalletPayload) -> Result<Wallet, Error> {
            self.check()?;
            let mut wallets = self.wallets.lock().unwrap();
            let wallet = wallets
                .iter_mut()
                .find(|w| w.id == payload.id)
                .ok_or(Error::WalletNotFound(payload.id))?;
            wallet.user_id = payload.user_id;
            wallet.user_name = payload.user_name;
            wallet.wallet_name = payload.wallet_name;
            wallet.wallet_type = payload.wallet_type;
            wallet.balance = payload.balance;
            Ok(wallet.clone())
        }

        async fn delete_wallets_by_user_id(&self, user_id: String) -> Result<u64, Error> {
            self.check()?;
            let mut wallets = self.wallets.lock().unwrap();
            let before = wallets.len();
            wallets.retain(|w| w.user_id.to_string() != user_id);
            match (before - wallets.len()) as u64 {
                0 => Err(Error::NoWalletsForUser(user_id)),
                deleted => Ok(deleted),
            }
        }

        async fn wallets_by_user_id(&self, user_id: String) -> Result<Vec<Wallet>, Error> {
            self.check()?;
            Ok(self
                .snapshot()
                .into_iter()
                .filter(|w| w.user_id.to_string() == user_id)
                .collect())
        }
    }
}
