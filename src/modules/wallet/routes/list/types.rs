pub mod request {
    use crate::modules::wallet::repository;

    pub type Filters = repository::Filters;
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::modules::wallet::{
        repository::{self, Wallet},
        routes::error_response,
    };

    pub enum Success {
        Wallets(Vec<Wallet>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Wallets(wallets) => (StatusCode::OK, Json(wallets)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchWallets(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchWallets(err) => error_response(err),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
