use std::io::ErrorKind;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::graphql::models::QuestionData;
use crate::ident::problem_dir;

use super::{ControlError, ControlResult, Language, LeetcodeControlPlane};

impl LeetcodeControlPlane {
    /// Fetches the question description for `slug` in the configured language.
    ///
    /// # Errors
    /// Returns `ControlError::DescriptionNotFound` when the question or its
    /// content is missing, and `ControlError::Client` on request failure.
    pub async fn question_description_by_slug(&self, slug: &str) -> ControlResult<String> {
        let variables = json!({ "titleSlug": slug });
        let data: QuestionData = self
            .client
            .execute(self.language.description_operation(), &variables)
            .await
            .map_err(|err| {
                error!(slug, language = %self.language, error = %err, "failed to fetch question description");
                ControlError::from(err)
            })?;

        let content = data.question.and_then(|question| match self.language {
            Language::Chinese => question.translated_content,
            Language::English => question.content,
        });
        match content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => {
                debug!(slug, "question has no description content");
                Err(ControlError::DescriptionNotFound {
                    slug: slug.to_string(),
                })
            }
        }
    }

    /// Resolves `problem_id` to a slug, then fetches its description.
    ///
    /// # Errors
    /// Propagates slug resolution and description errors.
    pub async fn question_description_by_problem_id(
        &self,
        problem_id: &str,
    ) -> ControlResult<String> {
        let slug = self.find_slug_by_problem_id(problem_id).await?;
        self.question_description_by_slug(&slug).await
    }

    /// Returns the cached description next to `file_path` when present,
    /// otherwise resolves the folder's problem id and fetches it remotely.
    ///
    /// # Errors
    /// Propagates slug resolution and description errors.
    pub async fn question_description_by_path(&self, file_path: &str) -> ControlResult<String> {
        if let Some(cached) = self.read_cached_description(file_path).await {
            return Ok(cached);
        }
        let slug = self.find_slug_by_path(file_path).await?;
        self.question_description_by_slug(&slug).await
    }

    async fn read_cached_description(&self, file_path: &str) -> Option<String> {
        let path = problem_dir(file_path).join(self.language.cache_file_name());
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                debug!(path = %path.display(), "using cached problem description");
                Some(content)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read cached problem description");
                None
            }
        }
    }
}
