use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
	#[error("invalid datasource credentials: {0}")]
	Credentials(#[from] reqwest::header::InvalidHeaderValue),

	#[error("failed building http client: {0}")]
	Client(#[from] reqwest::Error),
}

/// shared server state: loaded config plus one authenticated client towards
/// the document store, cheap to clone across handlers
#[derive(Clone)]
pub struct Context(Arc<ContextInner>);

struct ContextInner {
	config: Config,
	client: reqwest::Client,
}

impl Context {
	pub fn new(config: Config) -> Result<Self, ContextError> {
		let mut headers = HeaderMap::new();
		headers.insert("X-Appwrite-Project", HeaderValue::from_str(&config.datasource.project)?);
		headers.insert("X-Appwrite-Key", HeaderValue::from_str(&config.datasource.api_key)?);

		let client = reqwest::Client::builder()
			.default_headers(headers)
			.timeout(std::time::Duration::from_secs(config.datasource.request_timeout_seconds))
			.build()?;

		Ok(Self(Arc::new(ContextInner { config, client })))
	}

	pub fn cfg(&self) -> &Config {
		&self.0.config
	}

	pub fn client(&self) -> &reqwest::Client {
		&self.0.client
	}

	/// documents endpoint for a collection of the configured database
	pub fn documents_url(&self, collection: &str) -> String {
		format!(
			"{}/databases/{}/collections/{}/documents",
			self.0.config.datasource.endpoint, self.0.config.datasource.database, collection,
		)
	}

	/// users service endpoint for a single account
	pub fn user_url(&self, id: &str) -> String {
		format!("{}/users/{}", self.0.config.datasource.endpoint, id)
	}
}

#[cfg(test)]
mod test {
	use super::Context;
	use crate::Config;

	#[test]
	fn store_urls_compose_from_config() {
		let mut config = Config::default();
		config.datasource.endpoint = "http://store.local/v1".to_string();
		config.datasource.database = "qa".to_string();
		let ctx = Context::new(config).unwrap();

		assert_eq!(
			ctx.documents_url("questions"),
			"http://store.local/v1/databases/qa/collections/questions/documents",
		);
		assert_eq!(ctx.user_url("u1"), "http://store.local/v1/users/u1");
	}
}
