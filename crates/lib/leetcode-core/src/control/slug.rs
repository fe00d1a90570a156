use serde_json::{Value, json};
use tracing::{debug, error, warn};

use crate::graphql::models::QuestionListData;
use crate::graphql::queries::PROBLEMSET_QUESTION_LIST;
use crate::ident::problem_id_from_path;

use super::{ControlError, ControlResult, LeetcodeControlPlane};

pub const PAGE_SIZE: usize = 100;
const CATEGORY_SLUG: &str = "all-code-essentials";

/// Filter object sent with every question list page. Only the keyword and
/// pagination vary between requests.
fn question_filters() -> Value {
    json!({
        "filterCombineType": "ALL",
        "statusFilter": { "questionStatuses": [], "operator": "IS" },
        "difficultyFilter": { "difficulties": [], "operator": "IS" },
        "languageFilter": { "languageSlugs": [], "operator": "IS" },
        "topicFilter": { "topicSlugs": [], "operator": "IS" },
        "acceptanceFilter": {},
        "frequencyFilter": {},
        "frontendIdFilter": {},
        "lastSubmittedFilter": {},
        "publishedFilter": {},
        "companyFilter": { "companySlugs": [], "operator": "IS" },
        "positionFilter": { "positionSlugs": [], "operator": "IS" },
        "contestPointFilter": { "contestPoints": [], "operator": "IS" },
        "premiumFilter": { "premiumStatus": [], "operator": "IS" }
    })
}

impl LeetcodeControlPlane {
    /// Finds the title slug of the question whose frontend id equals `problem_id`.
    ///
    /// Pages through the keyword search until a match is found or the server
    /// reports no more pages.
    ///
    /// # Errors
    /// Returns `ControlError::SlugNotFound` when the listing is exhausted,
    /// `ControlError::PageLimitReached` when the configured page bound is hit,
    /// and `ControlError::Client` when any page request fails.
    pub async fn find_slug_by_problem_id(&self, problem_id: &str) -> ControlResult<String> {
        let filters = question_filters();
        let mut page_no = 0;
        loop {
            if let Some(max_pages) = self.max_pages
                && page_no >= max_pages
            {
                warn!(problem_id, pages = page_no, "question search hit page limit");
                return Err(ControlError::PageLimitReached {
                    problem_id: problem_id.to_string(),
                    pages: page_no,
                });
            }

            let variables = json!({
                "searchKeyword": problem_id,
                "categorySlug": CATEGORY_SLUG,
                "skip": page_no * PAGE_SIZE,
                "limit": PAGE_SIZE,
                "filters": filters.clone(),
            });
            let data: QuestionListData = self
                .client
                .execute(PROBLEMSET_QUESTION_LIST, &variables)
                .await
                .map_err(|err| {
                    error!(problem_id, page = page_no, error = %err, "failed to list questions");
                    ControlError::from(err)
                })?;

            let page = data.question_list;
            if let Some(question) = page
                .questions
                .into_iter()
                .find(|question| question.question_frontend_id == problem_id)
            {
                return Ok(question.title_slug);
            }
            if !page.has_more {
                debug!(problem_id, pages = page_no + 1, "no question matched problem id");
                return Err(ControlError::SlugNotFound {
                    problem_id: problem_id.to_string(),
                });
            }
            page_no += 1;
        }
    }

    /// Finds the title slug for the problem folder that contains `file_path`.
    ///
    /// # Errors
    /// Same as [`Self::find_slug_by_problem_id`].
    pub async fn find_slug_by_path(&self, file_path: &str) -> ControlResult<String> {
        let problem_id = problem_id_from_path(file_path);
        self.find_slug_by_problem_id(&problem_id).await
    }
}
