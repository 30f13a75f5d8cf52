pub mod repository;
pub mod routes;
pub mod store;

pub use routes::get_router;
