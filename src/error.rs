use std::fmt::{self, Display};
use std::io;

use serde::Serialize;
use warp::http::StatusCode;
use warp::reject::{self, Rejection};

/// Error value every handler-level failure resolves to before it crosses the
/// API boundary. Carries the HTTP status code and an optional message.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub info: Option<String>,
}

impl ApiError {
    pub fn new(code: u16, info: String) -> Self {
        Self {
            code,
            info: Some(info),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn message(&self) -> String {
        match &self.info {
            Some(info) => info.to_owned(),
            None => match self.code {
                400 => String::from("Invalid request"),
                404 => String::from("Not found"),
                _ => String::from("Internal server error"),
            },
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message())
    }
}

impl std::error::Error for ApiError {}
impl reject::Reject for ApiError {}

#[derive(Debug, Clone, Copy)]
pub enum HttpError {
    InvalidRequest,
    NotFound,
    InternalServerError,
}

impl HttpError {
    fn code(&self) -> u16 {
        match self {
            HttpError::InvalidRequest => 400,
            HttpError::NotFound => 404,
            HttpError::InternalServerError => 500,
        }
    }

    pub fn new(self, info: &str) -> ApiError {
        ApiError::new(self.code(), info.to_string())
    }

    pub fn default(self) -> ApiError {
        ApiError {
            code: self.code(),
            info: None,
        }
    }
}

#[derive(Debug)]
pub struct StorageError {
    info: String,
}

impl StorageError {
    pub fn new(info: String) -> Self {
        Self { info }
    }
}

impl From<io::Error> for StorageError {
    fn from(value: io::Error) -> Self {
        match value.kind() {
            io::ErrorKind::NotFound => Self::new(format!("File not found ({value})")),
            io::ErrorKind::PermissionDenied => Self::new(format!("Permission denied ({value})")),
            io::ErrorKind::AlreadyExists => Self::new(format!("Already exists ({value})")),
            io::ErrorKind::WriteZero => Self::new(format!("Write failed ({value})")),
            io::ErrorKind::InvalidData => Self::new(format!("Invalid data ({value})")),
            io::ErrorKind::UnexpectedEof => Self::new(format!("Unexpected EOF ({value})")),
            _ => Self::new(format!("{value}")),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        match value.classify() {
            serde_json::error::Category::Io => Self::new(format!("{value}")),
            serde_json::error::Category::Syntax => Self::new(format!(
                "Invalid JSON at line {} column {}",
                value.line(),
                value.column()
            )),
            serde_json::error::Category::Data => Self::new(format!("Unexpected data shape: {value}")),
            serde_json::error::Category::Eof => Self::new(format!("Unexpected end of file: {value}")),
        }
    }
}

impl Into<ApiError> for StorageError {
    fn into(self) -> ApiError {
        ApiError {
            code: 500,
            info: Some(self.info),
        }
    }
}

#[derive(Debug)]
pub struct TypeError {
    info: String,
}

impl TypeError {
    pub fn new(info: &str) -> Self {
        Self {
            info: info.to_string(),
        }
    }
}

impl Into<ApiError> for TypeError {
    fn into(self) -> ApiError {
        HttpError::InvalidRequest.new(&self.info)
    }
}

impl Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.info)
    }
}

impl std::error::Error for TypeError {}
impl Into<Rejection> for TypeError {
    fn into(self) -> Rejection {
        let error: ApiError = HttpError::InvalidRequest.new(&self.info);
        reject::custom(error)
    }
}
