use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("fetch from backing store failed: {0}")]
	Fetch(#[from] askr::store::RequestError),
}

/// the generic failure page, only surface any pipeline error ever gets
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		tracing::error!("failed building questions listing: {self}");
		(StatusCode::INTERNAL_SERVER_ERROR, ErrorTemplate {}).into_response()
	}
}

#[cfg(test)]
mod test {
	use askama::Template;

	use super::ErrorTemplate;

	#[test]
	fn error_state_renders_generic_copy() {
		let html = ErrorTemplate {}.render().unwrap();
		assert!(html.contains("Error loading questions. Please try again later."));
	}
}
