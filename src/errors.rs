use actix_web::{http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_derive::Serialize;

/// Envelope shared by every response of the notes API.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CommonError {
    #[display(fmt = "is required")]
    Missing,
    #[display(fmt = "is too long")]
    TooLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fields {
    Title(CommonError),
    Content(CommonError),
}

impl Fields {
    pub fn kind(&self) -> CommonError {
        match self {
            Fields::Title(kind) | Fields::Content(kind) => *kind,
        }
    }

    fn message(&self) -> String {
        match self {
            Fields::Title(CommonError::TooLong) => {
                format!("Title cannot be more than {} characters", crate::validation::TITLE_MAX_LEN)
            }
            Fields::Content(CommonError::TooLong) => format!(
                "Content cannot be more than {} characters",
                crate::validation::CONTENT_MAX_LEN
            ),
            Fields::Title(CommonError::Missing) => "Please provide a title".to_string(),
            Fields::Content(CommonError::Missing) => "Please provide content".to_string(),
        }
    }
}

#[derive(Debug, Display)]
pub enum ServerError {
    #[display(fmt = "database not configured")]
    Configuration,
    #[display(fmt = "failed to connect: {}", _0)]
    Connection(String),
    #[display(fmt = "validation failed")]
    Validation(Vec<Fields>),
    #[display(fmt = "missing note id")]
    MissingId,
    #[display(fmt = "invalid request body: {}", _0)]
    InvalidBody(String),
    #[display(fmt = "invalid query: {}", _0)]
    InvalidQuery(String),
    #[display(fmt = "note not found")]
    NotFound,
    DieselError,
    EnvironmentError,
    R2D2Error,
    BlockingError,
}

impl ServerError {
    /// Text returned to the client. Only configuration and connection
    /// failures carry guidance, everything else stays generic.
    pub fn client_message(&self) -> String {
        match self {
            ServerError::Configuration => {
                "Database not configured. Please add DATABASE_URL to your .env file.".to_string()
            }
            ServerError::Connection(_) => {
                "Failed to connect to database. Please check your DATABASE_URL in .env".to_string()
            }
            ServerError::Validation(fields) => {
                if fields.iter().any(|f| f.kind() == CommonError::Missing) {
                    "Title and content are required".to_string()
                } else {
                    fields
                        .iter()
                        .map(Fields::message)
                        .collect::<Vec<_>>()
                        .join("; ")
                }
            }
            ServerError::MissingId => "Note ID is required".to_string(),
            ServerError::InvalidBody(detail) => format!("Invalid request body: {}", detail),
            ServerError::InvalidQuery(detail) => format!("Invalid query: {}", detail),
            ServerError::NotFound => "Note not found".to_string(),
            ServerError::DieselError
            | ServerError::EnvironmentError
            | ServerError::R2D2Error
            | ServerError::BlockingError => "Internal server error".to_string(),
        }
    }
}

impl From<r2d2::Error> for ServerError {
    fn from(e: r2d2::Error) -> ServerError {
        log::error!("pool error: {e}");
        ServerError::R2D2Error
    }
}

impl From<std::env::VarError> for ServerError {
    fn from(_: std::env::VarError) -> ServerError {
        ServerError::EnvironmentError
    }
}

impl From<std::num::ParseIntError> for ServerError {
    fn from(_: std::num::ParseIntError) -> ServerError {
        ServerError::EnvironmentError
    }
}

impl From<diesel::result::Error> for ServerError {
    fn from(e: diesel::result::Error) -> ServerError {
        log::error!("diesel error: {e}");
        ServerError::DieselError
    }
}

impl From<diesel::ConnectionError> for ServerError {
    fn from(e: diesel::ConnectionError) -> ServerError {
        ServerError::Connection(e.to_string())
    }
}

impl From<actix_web::error::BlockingError> for ServerError {
    fn from(e: actix_web::error::BlockingError) -> ServerError {
        log::error!("blocking task failed: {e}");
        ServerError::BlockingError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_)
            | ServerError::MissingId
            | ServerError::InvalidBody(_)
            | ServerError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("request failed: {self}");
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::error(self.client_message()))
    }
}

pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ServerError::InvalidBody(err.to_string()).into()
}

pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    ServerError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[test]
    fn missing_field_wins_over_length_errors() {
        let err = ServerError::Validation(vec![
            Fields::Title(CommonError::TooLong),
            Fields::Content(CommonError::Missing),
        ]);
        assert_eq!(err.client_message(), "Title and content are required");
    }

    #[test]
    fn length_errors_are_joined() {
        let err = ServerError::Validation(vec![
            Fields::Title(CommonError::TooLong),
            Fields::Content(CommonError::TooLong),
        ]);
        assert_eq!(
            err.client_message(),
            "Title cannot be more than 200 characters; Content cannot be more than 5000 characters"
        );
    }

    #[test]
    fn driver_detail_never_reaches_client() {
        let err = ServerError::Connection("password authentication failed for user \"admin\"".into());
        assert!(!err.client_message().contains("admin"));
        assert!(err.client_message().starts_with("Failed to connect to database"));
        assert_eq!(ServerError::DieselError.client_message(), "Internal server error");
    }

    #[actix_web::test]
    async fn error_response_uses_envelope() {
        let res = ServerError::NotFound.error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(res.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Note not found"}));
    }
}
