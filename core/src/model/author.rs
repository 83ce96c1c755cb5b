/// a user record from the platform's users service
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Author {
	#[serde(rename = "$id")]
	pub id: String,

	#[serde(default)]
	pub name: String,

	#[serde(default)]
	pub prefs: AuthorPrefs,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct AuthorPrefs {
	#[serde(default)]
	pub reputation: u32,
}

/// the reduced author fields attached to each rendered question
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorSummary {
	pub id: String,
	pub name: String,
	pub reputation: u32,
}

impl From<Author> for AuthorSummary {
	fn from(author: Author) -> Self {
		AuthorSummary {
			id: author.id,
			name: if author.name.is_empty() { "Unknown".to_string() } else { author.name },
			reputation: author.prefs.reputation,
		}
	}
}

#[cfg(test)]
mod test {
	use super::{Author, AuthorSummary};

	#[test]
	fn nameless_author_projects_as_unknown() {
		let author: Author = serde_json::from_str(r#"{"$id": "u1", "name": ""}"#).unwrap();
		let summary = AuthorSummary::from(author);

		assert_eq!(summary.name, "Unknown");
		assert_eq!(summary.reputation, 0);
	}

	#[test]
	fn reputation_defaults_to_zero_when_prefs_lack_it() {
		let author: Author = serde_json::from_str(
			r#"{"$id": "u2", "name": "ada", "prefs": {"theme": "dark"}}"#,
		)
		.unwrap();

		assert_eq!(author.prefs.reputation, 0);
		assert_eq!(AuthorSummary::from(author).name, "ada");
	}

	#[test]
	fn reputation_carries_over_from_prefs() {
		let author: Author = serde_json::from_str(
			r#"{"$id": "u3", "name": "grace", "prefs": {"reputation": 42}}"#,
		)
		.unwrap();

		let summary = AuthorSummary::from(author);
		assert_eq!(summary.reputation, 42);
		assert_eq!(summary.id, "u3");
	}
}
