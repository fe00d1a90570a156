use clap::{Parser, builder::BoolishValueParser};
use leetcode_core::control::{ControlPlaneConfig, Language, SolutionAuthor, default_authors};
use leetcode_core::graphql::{DEFAULT_ENDPOINT, GraphqlClientConfig};
use leetcode_mcp::server::{DEFAULT_MCP_HTTP_ADDR, McpHttpServerConfig};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_LANGUAGE: &str = "zh-CN";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Parser, Debug)]
#[command(name = "leetcode-mcpd", version, about = "LeetCode MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    #[arg(long, env = "LEETCODE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(
        long,
        env = "LEETCODE_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    #[arg(long, env = "LEETCODE_MAX_PAGES")]
    max_pages: Option<usize>,

    #[arg(long = "author", env = "LEETCODE_AUTHORS", value_delimiter = ',')]
    authors: Vec<String>,

    #[arg(
        long = "stdio",
        env = "LEETCODE_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "LEETCODE_MCP_HTTP",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    mcp_http: bool,

    #[arg(long, env = "LEETCODE_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct LeetcodeConfig {
    pub language: Language,
    pub endpoint: String,
    pub timeout: Duration,
    pub max_pages: Option<usize>,
    pub authors: Vec<SolutionAuthor>,
    pub enable_stdio: bool,
    pub mcp_http: bool,
    pub mcp_http_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
    NoTransport,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
            Self::NoTransport => write!(
                f,
                "no MCP transport enabled (set LEETCODE_ENABLE_STDIO or LEETCODE_MCP_HTTP)"
            ),
        }
    }
}

impl Error for ConfigError {}

impl LeetcodeConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    pub fn client_config(&self) -> GraphqlClientConfig {
        GraphqlClientConfig::new(self.endpoint.clone()).with_timeout(self.timeout)
    }

    pub fn control_config(&self) -> ControlPlaneConfig {
        ControlPlaneConfig::new(self.language)
            .with_authors(self.authors.clone())
            .with_max_pages(self.max_pages)
    }

    pub const fn http_config(&self) -> McpHttpServerConfig {
        McpHttpServerConfig::new(self.mcp_http_addr)
    }
}

impl TryFrom<CliArgs> for LeetcodeConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let endpoint = args.endpoint.trim().to_string();
        if endpoint.is_empty() {
            return Err(ConfigError::MissingSetting("LEETCODE_ENDPOINT"));
        }

        if args.timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "LEETCODE_TIMEOUT_SECS",
                value: args.timeout_secs.to_string(),
            });
        }

        if args.max_pages == Some(0) {
            return Err(ConfigError::InvalidSetting {
                name: "LEETCODE_MAX_PAGES",
                value: "0".to_string(),
            });
        }

        let mut authors = Vec::with_capacity(args.authors.len());
        for value in args.authors.iter().filter(|value| !value.trim().is_empty()) {
            let author = value
                .parse::<SolutionAuthor>()
                .map_err(|_| ConfigError::InvalidSetting {
                    name: "LEETCODE_AUTHORS",
                    value: value.clone(),
                })?;
            authors.push(author);
        }
        if authors.is_empty() {
            authors = default_authors();
        }

        if !args.enable_stdio && !args.mcp_http {
            return Err(ConfigError::NoTransport);
        }

        Ok(Self {
            language: args.language.parse().unwrap_or_default(),
            endpoint,
            timeout: Duration::from_secs(args.timeout_secs),
            max_pages: args.max_pages,
            authors,
            enable_stdio: args.enable_stdio,
            mcp_http: args.mcp_http,
            mcp_http_addr: args.mcp_http_addr,
        })
    }
}
