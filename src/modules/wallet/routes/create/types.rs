pub mod request {
    use crate::modules::wallet::repository;

    pub type Payload = repository::CreateWalletPayload;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::modules::wallet::{
        repository::{self, Wallet},
        routes::error_response,
    };

    pub enum Success {
        WalletCreated(Wallet),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletCreated(wallet) => (StatusCode::CREATED, Json(wallet)).into_response(),
            }
        }
    }

    pub enum Error {
        WalletCreationFailed(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletCreationFailed(err) => error_response(err),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
