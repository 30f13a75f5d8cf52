pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::modules::wallet::{repository, routes::error_response};

    pub enum Success {
        WalletsDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::WalletsDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToDeleteWallets(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToDeleteWallets(err) => error_response(err),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
