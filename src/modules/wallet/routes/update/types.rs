pub mod request {
    use crate::modules::wallet::repository;

    pub type Payload = repository::UpdateWalletPayload;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::modules::wallet::{
        repository::{self, Wallet},
        routes::error_response,
    };

    pub enum Success {
        WalletUpdated(Wallet),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletUpdated(wallet) => (StatusCode::OK, Json(wallet)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToUpdateWallet(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToUpdateWallet(err) => error_response(err),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
