mod database {
    pub mod actions;
    pub mod form;
    pub mod repository;
    pub mod schema;
    pub mod search;
}
mod api {
    pub mod middleware;
    pub mod rejection;
    pub mod routes;
}
mod constants;
mod error;

pub use api::*;
pub use constants::*;
pub use database::*;
pub use error::*;
pub use repository::*;
pub use schema::*;
