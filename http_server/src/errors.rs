use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde_json::json;
use thiserror::Error;
use use_cases::errors::ClinicLocationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl From<ClinicLocationError> for ApiError {
    fn from(value: ClinicLocationError) -> Self {
        match value {
            ClinicLocationError::ValidationError(err) => ApiError::BadRequest(err.to_string()),
            ClinicLocationError::StoreError(err) => {
                tracing::error!(error = ?err, "Location store failure");
                ApiError::InternalServerError(err)
            }
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let err_json = json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err_json)
    }
}
