use std::{error::Error, fmt, str::FromStr};

use serde_json::json;
use tracing::{debug, error, warn};

use crate::graphql::models::{ArticleContentData, ArticleListData, ArticleNode, AuthorProfile};
use crate::graphql::queries::{DISCUSS_TOPIC, QUESTION_TOPICS_LIST};
use crate::ident::problem_id_from_path;

use super::{ControlError, ControlResult, LeetcodeControlPlane};

/// Number of articles requested per author search.
pub const ARTICLES_PER_AUTHOR: usize = 15;

/// A solution author whose articles are trusted, matched by display name or
/// profile slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionAuthor {
    pub name: String,
    pub slug: String,
}

impl SolutionAuthor {
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Either the real name or the profile slug must match.
    #[must_use]
    pub fn matches(&self, profile: &AuthorProfile) -> bool {
        profile.real_name.as_deref() == Some(self.name.as_str())
            || profile.user_slug.as_deref() == Some(self.slug.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAuthorError(String);

impl fmt::Display for ParseAuthorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected NAME:HANDLE, got {:?}", self.0)
    }
}

impl Error for ParseAuthorError {}

impl FromStr for SolutionAuthor {
    type Err = ParseAuthorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let Some((name, slug)) = value.rsplit_once(':') else {
            return Err(ParseAuthorError(value.to_string()));
        };
        let (name, slug) = (name.trim(), slug.trim());
        if name.is_empty() || slug.is_empty() {
            return Err(ParseAuthorError(value.to_string()));
        }
        Ok(Self::new(name, slug))
    }
}

/// Authors tried, in order, when looking for a solution article.
#[must_use]
pub fn default_authors() -> Vec<SolutionAuthor> {
    vec![
        SolutionAuthor::new("宫水三叶", "ac_oier"),
        SolutionAuthor::new("灵茶山艾府", "endlesscheng"),
    ]
}

impl LeetcodeControlPlane {
    /// Resolves `problem_id` and returns the first solution article written by
    /// a listed author.
    ///
    /// # Errors
    /// Slug resolution errors are returned as-is without searching articles.
    /// Returns `ControlError::NoSolutionArticle` when no author yields content.
    pub async fn solution_by_problem_id(&self, problem_id: &str) -> ControlResult<String> {
        let slug = self.find_slug_by_problem_id(problem_id).await?;
        self.solution_by_slug(problem_id, &slug).await
    }

    /// Same as [`Self::solution_by_problem_id`] for the problem folder holding `file_path`.
    ///
    /// # Errors
    /// Same as [`Self::solution_by_problem_id`].
    pub async fn solution_by_path(&self, file_path: &str) -> ControlResult<String> {
        let problem_id = problem_id_from_path(file_path);
        self.solution_by_problem_id(&problem_id).await
    }

    async fn solution_by_slug(&self, problem_id: &str, slug: &str) -> ControlResult<String> {
        for author in &*self.authors {
            let articles = match self.list_author_articles(slug, author).await {
                Ok(articles) => articles,
                Err(err) => {
                    error!(problem_id, author = %author.name, error = %err, "failed to list solution articles");
                    continue;
                }
            };

            for article in &articles {
                // An edge without a profile ends this author's scan.
                let Some(profile) = article.profile() else {
                    warn!(problem_id, author = %author.name, article = %article.slug, "solution article has no author profile");
                    break;
                };
                if !author.matches(profile) {
                    continue;
                }
                match self.solution_article_content(&article.slug).await {
                    Ok(content) => return Ok(content),
                    Err(ControlError::Client(err)) => {
                        error!(article = %article.slug, error = %err, "failed to fetch solution article");
                    }
                    Err(err) => debug!(article = %article.slug, reason = %err, "skipping article"),
                }
            }
        }
        Err(ControlError::NoSolutionArticle {
            slug: slug.to_string(),
        })
    }

    /// Lists solution articles for `slug` searched by the author's display name.
    ///
    /// # Errors
    /// Returns `ControlError::Client` on request or decode failure.
    pub async fn list_author_articles(
        &self,
        slug: &str,
        author: &SolutionAuthor,
    ) -> ControlResult<Vec<ArticleNode>> {
        let variables = json!({
            "questionSlug": slug,
            "skip": 0,
            "first": ARTICLES_PER_AUTHOR,
            "orderBy": "DEFAULT",
            "userInput": author.name,
            "tagSlugs": [],
        });
        let data: ArticleListData = self
            .client
            .execute(QUESTION_TOPICS_LIST, &variables)
            .await?;
        Ok(data
            .question_solution_articles
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect())
    }

    /// Fetches the markdown content of a solution article.
    ///
    /// # Errors
    /// Returns `ControlError::ArticleNotFound` for a missing or empty article
    /// and `ControlError::Client` on request failure.
    pub async fn solution_article_content(&self, article_slug: &str) -> ControlResult<String> {
        let variables = json!({ "slug": article_slug });
        let data: ArticleContentData = self.client.execute(DISCUSS_TOPIC, &variables).await?;
        data.solution_article
            .and_then(|article| article.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ControlError::ArticleNotFound {
                slug: article_slug.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(real_name: Option<&str>, user_slug: Option<&str>) -> AuthorProfile {
        AuthorProfile {
            real_name: real_name.map(str::to_string),
            user_slug: user_slug.map(str::to_string),
        }
    }

    #[test]
    fn author_matches_on_either_field() {
        let author = SolutionAuthor::new("宫水三叶", "ac_oier");
        assert!(author.matches(&profile(Some("宫水三叶"), Some("someone"))));
        assert!(author.matches(&profile(Some("Renamed"), Some("ac_oier"))));
        assert!(author.matches(&profile(None, Some("ac_oier"))));
        assert!(!author.matches(&profile(Some("灵茶山艾府"), Some("endlesscheng"))));
        assert!(!author.matches(&profile(None, None)));
    }

    #[test]
    fn parses_name_and_handle() {
        let author: SolutionAuthor = "灵茶山艾府:endlesscheng".parse().expect("author parses");
        assert_eq!(author, SolutionAuthor::new("灵茶山艾府", "endlesscheng"));
        assert!("no-separator".parse::<SolutionAuthor>().is_err());
        assert!(":handle".parse::<SolutionAuthor>().is_err());
    }

    #[test]
    fn default_authors_keep_declared_order() {
        let handles: Vec<_> = default_authors().into_iter().map(|a| a.slug).collect();
        assert_eq!(handles, ["ac_oier", "endlesscheng"]);
    }
}
