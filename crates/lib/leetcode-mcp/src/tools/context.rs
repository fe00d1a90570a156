use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::LeetcodeMcp;

/// Payload listing the lookup tools.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub language: String,
    pub authors: Vec<String>,
    pub commands: Vec<String>,
}

impl HelpCommands {
    fn for_server(server: &LeetcodeMcp) -> Self {
        let control = server.control();
        Self {
            language: control.language().to_string(),
            authors: control
                .authors()
                .iter()
                .map(|author| format!("{} ({})", author.name, author.slug))
                .collect(),
            commands: vec![
                "find_leetcode_question_slug_by_problem_id - Resolve the URL slug for a frontend problem id."
                    .to_string(),
                "find_leetcode_question_slug - Resolve the URL slug for the problem folder holding a file."
                    .to_string(),
                "get_leetcode_question_desc_by_problem_id - Fetch the problem description by problem id."
                    .to_string(),
                "get_leetcode_question_desc - Read the cached problem markdown next to a file, or fetch it."
                    .to_string(),
                "get_leetcode_question_solution_by_problem_id - Fetch a solution article by problem id."
                    .to_string(),
                "get_leetcode_question_solution - Fetch a solution article for the problem folder holding a file."
                    .to_string(),
                "health - Returns ok.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl LeetcodeMcp {
    #[tool(description = "List the lookup tools, the content language, and the trusted solution authors.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::for_server(self))?]))
    }
}

#[cfg(test)]
mod tests {
    use leetcode_core::control::{ControlPlaneConfig, LeetcodeControlPlane};
    use leetcode_core::graphql::{GraphqlClient, GraphqlClientConfig};

    use super::*;

    #[test]
    fn help_lists_every_lookup_tool_and_author() {
        let client = GraphqlClient::new(&GraphqlClientConfig::default()).expect("client builds");
        let server = LeetcodeMcp::new(LeetcodeControlPlane::new(client, ControlPlaneConfig::default()));

        let help = HelpCommands::for_server(&server);

        assert_eq!(help.language, "zh-CN");
        assert_eq!(help.authors, ["宫水三叶 (ac_oier)", "灵茶山艾府 (endlesscheng)"]);
        assert_eq!(
            help.commands
                .iter()
                .filter(|command| command.contains("leetcode_question"))
                .count(),
            6
        );
    }
}
