use crate::{
    modules::wallet::{repository::Repository, store::Storer},
    utils::{config::Config, database},
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub wallets: Arc<dyn Storer>,
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let db_conn = database::connect(&self.database).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            wallets: Arc::new(Repository::new(db_conn)),
        })
    }
}
