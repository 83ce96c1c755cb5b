use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};

use askr::enrich::{self, RichQuestion};
use askr::traits::Fetcher;
use askr::Context;

use crate::ApiResult;

/// how many questions one listing page shows
pub const PAGE_LENGTH: u64 = 25;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PageQuery {
	/// raw page parameter, anything that is not a positive number means page one
	pub page: Option<String>,
}

impl PageQuery {
	pub fn page(&self) -> u64 {
		self.page
			.as_deref()
			.and_then(|p| p.parse::<u64>().ok())
			.filter(|p| *p >= 1)
			.unwrap_or(1)
	}

	pub fn offset(&self) -> u64 {
		(self.page() - 1) * PAGE_LENGTH
	}
}

/// pagination meta for the listing's controls, driven by the unwindowed
/// total the store reported, not by how many cards survived enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
	pub page: u64,
	pub total: u64,
	pub limit: u64,
}

impl Pager {
	pub fn new(page: u64, total: u64) -> Self {
		Pager { page, total, limit: PAGE_LENGTH }
	}

	pub fn total_pages(&self) -> u64 {
		self.total.div_ceil(self.limit).max(1)
	}

	pub fn has_prev(&self) -> bool {
		self.page > 1
	}

	pub fn has_next(&self) -> bool {
		self.page < self.total_pages()
	}

	pub fn prev(&self) -> u64 {
		self.page.saturating_sub(1).max(1)
	}

	pub fn next(&self) -> u64 {
		(self.page + 1).min(self.total_pages())
	}
}

#[derive(Template, WebTemplate)]
#[template(path = "questions.html")]
pub struct QuestionsTemplate {
	pub user_id: String,
	pub user_slug: String,
	pub questions: Vec<RichQuestion>,
	pub pager: Pager,
}

#[derive(Template, WebTemplate)]
#[template(path = "empty.html")]
pub struct EmptyTemplate {}

pub async fn page(
	State(ctx): State<Context>,
	Path((user_id, user_slug)): Path<(String, String)>,
	Query(query): Query<PageQuery>,
) -> ApiResult<Response> {
	let page = query.page();
	tracing::debug!("listing questions of user {user_id}, page {page}");

	let listing = ctx.list_questions(&user_id, query.offset(), PAGE_LENGTH).await?;
	tracing::debug!("found {} questions out of {} total", listing.documents.len(), listing.total);

	if listing.documents.is_empty() {
		tracing::warn!("no questions found for user {user_id}");
		return Ok(EmptyTemplate {}.into_response());
	}

	let questions = enrich::enrich(&ctx, listing.documents).await;

	Ok(QuestionsTemplate {
		pager: Pager::new(page, listing.total),
		user_id,
		user_slug,
		questions,
	}
	.into_response())
}
