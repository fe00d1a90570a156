use leetcode_core::control::ControlResult;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::LeetcodeMcp;
use crate::helpers::{self, NO_SOLUTION_ARTICLE_FOUND, SOLUTION_ARTICLE_ERROR};

/// Parameters for fetching a solution article by problem id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SolutionByProblemIdParams {
    #[schemars(description = "LeetCode problem ID")]
    pub problem_id: String,
}

/// Parameters for fetching a solution article by problem file path.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SolutionParams {
    #[schemars(description = "LeetCode problem file path")]
    pub file_path: String,
}

fn solution_text(result: ControlResult<String>) -> String {
    match result {
        Ok(content) => content,
        Err(err) if err.is_slug_failure() => NO_SOLUTION_ARTICLE_FOUND.to_string(),
        Err(_) => SOLUTION_ARTICLE_ERROR.to_string(),
    }
}

impl LeetcodeMcp {
    /// Returns a solution article for the problem id, or one of the
    /// `No solution article found` / `Error fetching solution article` sentences.
    pub async fn lookup_solution(&self, problem_id: &str) -> String {
        solution_text(self.control.solution_by_problem_id(problem_id).await)
    }

    /// Same as [`Self::lookup_solution`] for the problem folder holding `file_path`.
    pub async fn lookup_solution_for_path(&self, file_path: &str) -> String {
        solution_text(self.control.solution_by_path(file_path).await)
    }
}

#[tool_router(router = tool_router_solution, vis = "pub")]
impl LeetcodeMcp {
    #[tool(description = "Get problem solution and explanation by problem ID")]
    async fn get_leetcode_question_solution_by_problem_id(
        &self,
        Parameters(params): Parameters<SolutionByProblemIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_result(
            self.lookup_solution(&params.problem_id).await,
        ))
    }

    #[tool(description = "Get problem solution and explanation by problem file")]
    async fn get_leetcode_question_solution(
        &self,
        Parameters(params): Parameters<SolutionParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_result(
            self.lookup_solution_for_path(&params.file_path).await,
        ))
    }
}

#[cfg(test)]
mod tests {
    use leetcode_core::control::ControlError;

    use super::*;

    #[test]
    fn slug_failures_read_as_not_found() {
        let result = Err(ControlError::SlugNotFound {
            problem_id: "1".to_string(),
        });
        assert_eq!(solution_text(result), NO_SOLUTION_ARTICLE_FOUND);
    }

    #[test]
    fn exhausted_authors_read_as_fetch_error() {
        let result = Err(ControlError::NoSolutionArticle {
            slug: "two-sum".to_string(),
        });
        assert_eq!(solution_text(result), SOLUTION_ARTICLE_ERROR);
    }
}
