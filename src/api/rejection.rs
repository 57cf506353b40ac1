use serde::Serialize;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::error::ApiError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Converts every rejection into the `{"error": message}` body the API
/// promises; nothing falls through as a bare warp reply.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Rejection> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, String::from("Not found"))
    } else if let Some(error) = err.find::<ApiError>() {
        (error.status(), error.message())
    } else if let Some(error) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {error}"))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, String::from("Payload too large"))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, String::from("Method not allowed"))
    } else {
        log::error!("unhandled rejection: {err:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("Internal server error"),
        )
    };

    if status.is_server_error() {
        log::error!("request failed: {status} {message}");
    } else {
        log::debug!("request rejected: {status} {message}");
    }

    let body = warp::reply::json(&ErrorBody { error: message });
    Ok(warp::reply::with_status(body, status))
}
