//! MCP server implementation for leetcode-mcp.
//!
//! This crate wires the lookup control plane into rmcp tool handlers. Every
//! lookup tool answers with plain text; remote failures are reported with a
//! fixed sentence instead of a protocol error.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use leetcode_core::control::LeetcodeControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};

pub use helpers::{
    NO_DESCRIPTION_FOUND,
    NO_SLUG_FOUND,
    NO_SOLUTION_ARTICLE_FOUND,
    SOLUTION_ARTICLE_ERROR,
};

const SERVER_INSTRUCTIONS: &str = r"leetcode-mcp looks up LeetCode problem descriptions and community solution articles.

Problems can be addressed two ways:
1. By frontend problem id, e.g. `1` or `面试题 17.01`.
2. By a local file path. The parent folder name encodes the id as `<prefix>_<id>`, where `__`
   stands for `.` and `_` for a space, e.g. `0001_1/solution.rs` or `1701_Interview_17__01/main.rs`.

Tools:
- `find_leetcode_question_slug_by_problem_id`, `find_leetcode_question_slug` resolve the URL slug.
- `get_leetcode_question_desc_by_problem_id`, `get_leetcode_question_desc` return the description.
  The file-based variant prefers a `problem_zh.md` (zh-CN) or `problem.md` next to the file.
- `get_leetcode_question_solution_by_problem_id`, `get_leetcode_question_solution` return a
  solution article written by one of the configured authors.

Notes:
- Lookups always answer with text. Failures read `No slug found`, `No description found`,
  `No solution article found`, or `Error fetching solution article`.
- `help` lists the tools, `health` returns `ok`.";

/// MCP server wrapper around the lookup control plane and tool routers.
#[derive(Clone)]
pub struct LeetcodeMcp {
    tool_router: ToolRouter<Self>,
    control: Arc<LeetcodeControlPlane>,
}

impl LeetcodeMcp {
    /// Creates a new server using a control plane by value.
    #[must_use]
    pub fn new(control: LeetcodeControlPlane) -> Self {
        Self::with_control(Arc::new(control))
    }

    /// Creates a new server using a shared control plane handle.
    #[must_use]
    pub fn with_control(control: Arc<LeetcodeControlPlane>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_slug()
            + Self::tool_router_description()
            + Self::tool_router_solution()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }

    #[must_use]
    pub fn control(&self) -> &LeetcodeControlPlane {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl LeetcodeMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for LeetcodeMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
