use tower_http::classify::{SharedClassifier, StatusInRangeAsFailures};

pub mod error;
pub use error::{ApiError, ApiResult};

pub mod web;

pub async fn serve(ctx: askr::Context, bind: String, shutdown: impl ShutdownToken) -> Result<(), std::io::Error> {
	use tower_http::{cors::CorsLayer, trace::TraceLayer};

	let router = web::web_routes(ctx)
		.layer(
			// 4xx isn't really a failure but the whole surface is one page,
			// anything above 3xx is worth seeing in logs
			TraceLayer::new(SharedClassifier::new(StatusInRangeAsFailures::new(300..=999)))
				.make_span_with(|req: &axum::http::Request<_>| {
					tracing::span!(
						tracing::Level::INFO,
						"request",
						uri = %req.uri(),
						status_code = tracing::field::Empty,
					)
				})
		)
		.layer(CorsLayer::permissive());

	tracing::info!("serving questions listing on {bind}");

	let listener = tokio::net::TcpListener::bind(bind).await?;
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown.event())
		.await?;

	Ok(())
}

pub trait ShutdownToken: Sync + Send + 'static {
	fn event(self) -> impl std::future::Future<Output = ()> + std::marker::Send;
}
