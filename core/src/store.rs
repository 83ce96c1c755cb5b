use serde::de::DeserializeOwned;

use crate::Context;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
	#[error("request towards document store failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("document store returned {0}")]
	Status(reqwest::StatusCode),
}

/// one clause of a listing query, serialized to the store's wire format
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
	Equal(&'static str, String),
	OrderDesc(&'static str),
	Limit(u64),
	Offset(u64),
}

impl Query {
	pub fn equal(attribute: &'static str, value: impl Into<String>) -> Self {
		Query::Equal(attribute, value.into())
	}

	pub fn order_desc(attribute: &'static str) -> Self {
		Query::OrderDesc(attribute)
	}

	pub fn limit(n: u64) -> Self {
		Query::Limit(n)
	}

	pub fn offset(n: u64) -> Self {
		Query::Offset(n)
	}

	/// the json string the store expects inside repeated `queries[]` params
	pub fn to_wire(&self) -> String {
		match self {
			Query::Equal(attribute, value) =>
				serde_json::json!({"method": "equal", "attribute": attribute, "values": [value]}),
			Query::OrderDesc(attribute) =>
				serde_json::json!({"method": "orderDesc", "attribute": attribute}),
			Query::Limit(n) =>
				serde_json::json!({"method": "limit", "values": [n]}),
			Query::Offset(n) =>
				serde_json::json!({"method": "offset", "values": [n]}),
		}
		.to_string()
	}
}

/// listing envelope returned by the store: the requested window of documents
/// plus the total matching count independent of windowing
#[derive(Clone, Debug, serde::Deserialize)]
pub struct DocumentList<T> {
	pub total: u64,
	pub documents: Vec<T>,
}

impl Context {
	pub(crate) async fn list_documents<T: DeserializeOwned>(
		&self,
		collection: &str,
		queries: &[Query],
	) -> Result<DocumentList<T>, RequestError> {
		let params: Vec<(&str, String)> = queries
			.iter()
			.map(|q| ("queries[]", q.to_wire()))
			.collect();

		let res = self
			.client()
			.get(self.documents_url(collection))
			.query(&params)
			.send()
			.await?;

		if !res.status().is_success() {
			return Err(RequestError::Status(res.status()));
		}

		Ok(res.json().await?)
	}

	pub(crate) async fn get_user(&self, id: &str) -> Result<crate::model::author::Author, RequestError> {
		let res = self.client().get(self.user_url(id)).send().await?;

		if !res.status().is_success() {
			return Err(RequestError::Status(res.status()));
		}

		Ok(res.json().await?)
	}
}

#[cfg(test)]
mod test {
	use super::{DocumentList, Query};
	use crate::model::question::Question;

	#[test]
	fn queries_serialize_to_store_wire_format() {
		assert_eq!(
			Query::equal("authorId", "u1").to_wire(),
			r#"{"attribute":"authorId","method":"equal","values":["u1"]}"#,
		);
		assert_eq!(
			Query::order_desc("$createdAt").to_wire(),
			r#"{"attribute":"$createdAt","method":"orderDesc"}"#,
		);
		assert_eq!(Query::limit(25).to_wire(), r#"{"method":"limit","values":[25]}"#);
		assert_eq!(Query::offset(50).to_wire(), r#"{"method":"offset","values":[50]}"#);
	}

	#[test]
	fn listing_envelope_reports_unwindowed_total() {
		let list: DocumentList<Question> = serde_json::from_str(
			r#"{
				"total": 57,
				"documents": [{
					"$id": "q1",
					"$createdAt": "2024-05-01T12:34:56.789+00:00",
					"title": "lifetime soup",
					"authorId": "u1"
				}]
			}"#,
		)
		.unwrap();

		assert_eq!(list.total, 57);
		assert_eq!(list.documents.len(), 1);
		assert_eq!(list.documents[0].id, "q1");
	}
}
