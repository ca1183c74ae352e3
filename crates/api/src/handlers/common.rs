use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use swap_types::ErrorInfo;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	/// Symbolic name of the error code, e.g. `WRONG_PARAMETERS`
	pub error: String,
	pub code: u32,
	pub message: String,
	pub timestamp: i64,
}

impl From<ErrorInfo> for ErrorResponse {
	fn from(info: ErrorInfo) -> Self {
		Self {
			error: info.code.name().to_string(),
			code: info.code.code(),
			message: info.message,
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Status and body for an [`ErrorInfo`]
pub fn error_response(info: ErrorInfo) -> ApiError {
	let status =
		StatusCode::from_u16(info.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
	(status, Json(ErrorResponse::from(info)))
}
