use crate::model::author::AuthorSummary;
use crate::model::question::Question;
use crate::store::RequestError;
use crate::traits::Fetcher;

/// a question decorated with everything the listing shows about it
#[derive(Clone, Debug, PartialEq)]
pub struct RichQuestion {
	pub question: Question,
	pub author: AuthorSummary,
	pub total_answers: u64,
	pub total_votes: u64,
}

/// decorate a page of questions with author projections and engagement counts
///
/// per question the three lookups run concurrently, and so do all questions'
/// lookup groups: everything is joined before returning, order preserved.
/// questions whose author cannot be resolved are dropped, failed counts
/// collapse to zero, so a half-broken backend still produces a page
pub async fn enrich<F: Fetcher + Sync>(fetcher: &F, questions: Vec<Question>) -> Vec<RichQuestion> {
	futures::future::join_all(questions.into_iter().map(|question| async move {
		let (author, answers, votes) = futures::join!(
			fetcher.get_author(&question.author_id),
			fetcher.count_answers(&question.id),
			fetcher.count_votes(&question.id),
		);

		let author = match author {
			Ok(author) => AuthorSummary::from(author),
			Err(e) => {
				tracing::warn!("dropping question {}, could not resolve author {}: {e}", question.id, question.author_id);
				return None;
			},
		};

		Some(RichQuestion {
			total_answers: count_or_zero("answers", &question.id, answers),
			total_votes: count_or_zero("votes", &question.id, votes),
			author,
			question,
		})
	}))
	.await
	.into_iter()
	.flatten()
	.collect()
}

/// single recovery boundary for count lookups: a failed count renders as zero
fn count_or_zero(what: &str, question_id: &str, res: Result<u64, RequestError>) -> u64 {
	match res {
		Ok(count) => count,
		Err(e) => {
			tracing::warn!("failed counting {what} for question {question_id}, defaulting to zero: {e}");
			0
		},
	}
}
