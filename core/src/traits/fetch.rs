use crate::model::author::Author;
use crate::model::question::Question;
use crate::store::{DocumentList, Query, RequestError};

/// every remote read needed to assemble a questions listing, kept behind a
/// trait so the enrichment pipeline can run against canned data in tests
#[async_trait::async_trait]
pub trait Fetcher {
	/// one window of questions authored by the given user, newest first,
	/// together with the unwindowed total
	async fn list_questions(&self, author_id: &str, offset: u64, limit: u64) -> Result<DocumentList<Question>, RequestError>;

	/// author record behind a question, any failure means "unresolvable"
	async fn get_author(&self, id: &str) -> Result<Author, RequestError>;

	/// how many answers reference this question
	async fn count_answers(&self, question_id: &str) -> Result<u64, RequestError>;

	/// how many question votes reference this question
	async fn count_votes(&self, question_id: &str) -> Result<u64, RequestError>;
}

#[async_trait::async_trait]
impl Fetcher for crate::Context {
	async fn list_questions(&self, author_id: &str, offset: u64, limit: u64) -> Result<DocumentList<Question>, RequestError> {
		self.list_documents(
			&self.cfg().datasource.questions_collection,
			&[
				Query::equal("authorId", author_id),
				Query::order_desc("$createdAt"),
				Query::offset(offset),
				Query::limit(limit),
			],
		)
		.await
	}

	async fn get_author(&self, id: &str) -> Result<Author, RequestError> {
		self.get_user(id).await
	}

	async fn count_answers(&self, question_id: &str) -> Result<u64, RequestError> {
		// only the reported total matters, fetch as little as the store allows
		Ok(self
			.list_documents::<serde_json::Value>(
				&self.cfg().datasource.answers_collection,
				&[Query::equal("questionId", question_id), Query::limit(1)],
			)
			.await?
			.total)
	}

	async fn count_votes(&self, question_id: &str) -> Result<u64, RequestError> {
		// votes are shared between questions and answers, filter down to ours
		Ok(self
			.list_documents::<serde_json::Value>(
				&self.cfg().datasource.votes_collection,
				&[
					Query::equal("type", "question"),
					Query::equal("typeId", question_id),
					Query::limit(1),
				],
			)
			.await?
			.total)
	}
}
