use rmcp::model::{CallToolResult, Content};

pub const NO_SLUG_FOUND: &str = "No slug found";
pub const NO_DESCRIPTION_FOUND: &str = "No description found";
pub const NO_SOLUTION_ARTICLE_FOUND: &str = "No solution article found";
pub const SOLUTION_ARTICLE_ERROR: &str = "Error fetching solution article";

pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}
