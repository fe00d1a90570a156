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
use crate::helpers::{self, NO_SLUG_FOUND};

/// Parameters for resolving a slug from a frontend problem id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FindSlugByProblemIdParams {
    #[schemars(description = "LeetCode frontend problem id (e.g. \"1\", \"2\")")]
    pub frontend_problem_id: String,
}

/// Parameters for resolving a slug from a problem file path.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FindSlugParams {
    #[schemars(description = "LeetCode problem file path")]
    pub file_path: String,
}

impl LeetcodeMcp {
    /// Resolves the question slug for a frontend problem id, or `No slug found`.
    pub async fn lookup_slug(&self, frontend_problem_id: &str) -> String {
        self.control
            .find_slug_by_problem_id(frontend_problem_id)
            .await
            .unwrap_or_else(|_| NO_SLUG_FOUND.to_string())
    }

    /// Resolves the question slug for the problem folder holding `file_path`.
    pub async fn lookup_slug_for_path(&self, file_path: &str) -> String {
        self.control
            .find_slug_by_path(file_path)
            .await
            .unwrap_or_else(|_| NO_SLUG_FOUND.to_string())
    }
}

#[tool_router(router = tool_router_slug, vis = "pub")]
impl LeetcodeMcp {
    #[tool(description = "Find problem slug by LeetCode problem ID")]
    async fn find_leetcode_question_slug_by_problem_id(
        &self,
        Parameters(params): Parameters<FindSlugByProblemIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_result(
            self.lookup_slug(&params.frontend_problem_id).await,
        ))
    }

    #[tool(description = "Find problem slug from problem file")]
    async fn find_leetcode_question_slug(
        &self,
        Parameters(params): Parameters<FindSlugParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_result(
            self.lookup_slug_for_path(&params.file_path).await,
        ))
    }
}
