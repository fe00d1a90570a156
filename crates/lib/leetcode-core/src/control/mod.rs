use std::{error::Error, fmt, str::FromStr, sync::Arc};

use crate::graphql::queries::{QUESTION_CONTENT, QUESTION_TRANSLATIONS};
use crate::graphql::{ClientError, GraphqlClient, Operation};

pub mod description;
pub mod slug;
pub mod solution;

pub use solution::{ARTICLES_PER_AUTHOR, ParseAuthorError, SolutionAuthor, default_authors};

#[derive(Debug)]
pub enum ControlError {
    SlugNotFound { problem_id: String },
    PageLimitReached { problem_id: String, pages: usize },
    DescriptionNotFound { slug: String },
    ArticleNotFound { slug: String },
    NoSolutionArticle { slug: String },
    Client(ClientError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlugNotFound { problem_id } => {
                write!(f, "no question slug found for problem {problem_id}")
            }
            Self::PageLimitReached { problem_id, pages } => {
                write!(f, "stopped searching for problem {problem_id} after {pages} pages")
            }
            Self::DescriptionNotFound { slug } => write!(f, "no description found for {slug}"),
            Self::ArticleNotFound { slug } => write!(f, "solution article {slug} has no content"),
            Self::NoSolutionArticle { slug } => {
                write!(f, "no solution article by a listed author for {slug}")
            }
            Self::Client(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Client(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ClientError> for ControlError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl ControlError {
    /// True when the lookup could not resolve a question slug.
    #[must_use]
    pub const fn is_slug_failure(&self) -> bool {
        matches!(
            self,
            Self::SlugNotFound { .. } | Self::PageLimitReached { .. } | Self::Client(_)
        )
    }
}

pub type ControlResult<T> = Result<T, ControlError>;

/// Content language for question descriptions and the local cache file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub const CHINESE_TAG: &str = "zh-CN";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chinese => Self::CHINESE_TAG,
            Self::English => "en",
        }
    }

    /// Sibling markdown file that caches a problem description.
    #[must_use]
    pub const fn cache_file_name(self) -> &'static str {
        match self {
            Self::Chinese => "problem_zh.md",
            Self::English => "problem.md",
        }
    }

    #[must_use]
    pub const fn description_operation(self) -> Operation {
        match self {
            Self::Chinese => QUESTION_TRANSLATIONS,
            Self::English => QUESTION_CONTENT,
        }
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    /// Only the exact `zh-CN` tag selects translated content.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == Self::CHINESE_TAG {
            Ok(Self::Chinese)
        } else {
            Ok(Self::English)
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup settings threaded into the control plane.
#[derive(Debug, Clone)]
pub struct ControlPlaneConfig {
    pub language: Language,
    pub authors: Vec<SolutionAuthor>,
    pub max_pages: Option<usize>,
}

impl ControlPlaneConfig {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            authors: default_authors(),
            max_pages: None,
        }
    }

    #[must_use]
    pub fn with_authors(mut self, authors: Vec<SolutionAuthor>) -> Self {
        self.authors = authors;
        self
    }

    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for ControlPlaneConfig {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Lookup operations over the LeetCode GraphQL endpoint.
#[derive(Clone)]
pub struct LeetcodeControlPlane {
    client: GraphqlClient,
    language: Language,
    authors: Arc<[SolutionAuthor]>,
    max_pages: Option<usize>,
}

impl LeetcodeControlPlane {
    #[must_use]
    pub fn new(client: GraphqlClient, config: ControlPlaneConfig) -> Self {
        Self {
            client,
            language: config.language,
            authors: config.authors.into(),
            max_pages: config.max_pages,
        }
    }

    #[must_use]
    pub const fn client(&self) -> &GraphqlClient {
        &self.client
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn authors(&self) -> &[SolutionAuthor] {
        &self.authors
    }
}
