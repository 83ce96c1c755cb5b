use chrono::{DateTime, Utc};

/// a question document as the store returns it, rebuilt on every request and
/// never persisted locally
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Question {
	#[serde(rename = "$id")]
	pub id: String,

	#[serde(rename = "$createdAt")]
	pub created: DateTime<Utc>,

	pub title: String,

	#[serde(default)]
	pub content: String,

	#[serde(rename = "authorId")]
	pub author_id: String,

	#[serde(default)]
	pub tags: Vec<String>,

	#[serde(rename = "attachmentId", default)]
	pub attachment_id: Option<String>,
}

#[cfg(test)]
mod test {
	use super::Question;

	#[test]
	fn question_deserializes_from_store_document() {
		let question: Question = serde_json::from_str(
			r#"{
				"$id": "q1",
				"$collectionId": "questions",
				"$databaseId": "main",
				"$createdAt": "2024-05-01T12:34:56.789+00:00",
				"$updatedAt": "2024-05-01T12:34:56.789+00:00",
				"$permissions": [],
				"title": "borrowck fight",
				"content": "why does this not compile",
				"authorId": "u1",
				"tags": ["rust", "ownership"]
			}"#,
		)
		.unwrap();

		assert_eq!(question.id, "q1");
		assert_eq!(question.author_id, "u1");
		assert_eq!(question.tags, vec!["rust", "ownership"]);
		assert_eq!(question.attachment_id, None);
	}
}
