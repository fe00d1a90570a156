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
use crate::helpers::{self, NO_DESCRIPTION_FOUND};

/// Parameters for fetching a description by problem id.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DescByProblemIdParams {
    #[schemars(description = "LeetCode problem ID")]
    pub problem_id: String,
}

/// Parameters for fetching a description by problem file path.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DescParams {
    #[schemars(description = "LeetCode problem file path")]
    pub file_path: String,
}

impl LeetcodeMcp {
    /// Returns the problem description, or `No description found`.
    pub async fn lookup_description(&self, problem_id: &str) -> String {
        self.control
            .question_description_by_problem_id(problem_id)
            .await
            .unwrap_or_else(|_| NO_DESCRIPTION_FOUND.to_string())
    }

    /// Returns the cached or remote description for the problem file.
    pub async fn lookup_description_for_path(&self, file_path: &str) -> String {
        self.control
            .question_description_by_path(file_path)
            .await
            .unwrap_or_else(|_| NO_DESCRIPTION_FOUND.to_string())
    }
}

#[tool_router(router = tool_router_description, vis = "pub")]
impl LeetcodeMcp {
    #[tool(description = "Find problem description (markdown content) from problem file")]
    async fn get_leetcode_question_desc(
        &self,
        Parameters(params): Parameters<DescParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_result(
            self.lookup_description_for_path(&params.file_path).await,
        ))
    }

    #[tool(description = "Get problem description by problem ID")]
    async fn get_leetcode_question_desc_by_problem_id(
        &self,
        Parameters(params): Parameters<DescByProblemIdParams>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(helpers::text_result(
            self.lookup_description(&params.problem_id).await,
        ))
    }
}
