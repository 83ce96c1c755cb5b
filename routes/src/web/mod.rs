pub mod questions;

use axum::response::IntoResponse;
use axum::{routing::get, Router};

pub fn web_routes(ctx: askr::Context) -> Router {
	Router::new()
		.route("/users/{user_id}/{user_slug}/questions", get(questions::page))
		.route("/assets/style.css", get(style_css))
		.with_state(ctx)
}

async fn style_css() -> impl IntoResponse {
	(
		[(axum::http::header::CONTENT_TYPE, "text/css")],
		include_str!("../../assets/style.css"),
	)
}
