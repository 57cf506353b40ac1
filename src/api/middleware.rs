use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::form::FormData;
use crate::repository::Database;

pub fn with_database(
    db: Arc<Database>,
) -> impl Filter<Extract = (Arc<Database>,), Error = Infallible> + Clone {
    warp::any().map(move || db.clone())
}

/// JSON object body, decoded into loose form data for field-level
/// validation in the handlers.
pub fn with_json_body() -> impl Filter<Extract = (FormData,), Error = warp::Rejection> + Copy {
    warp::body::content_length_limit(1024 * 64).and(warp::body::json())
}
