//! Response shapes for the GraphQL operations in [`super::queries`].
//!
//! Only the fields the control plane reads are modelled; everything else in
//! the selection sets is ignored on decode.

use serde::{Deserialize, Serialize};

/// `data` payload of `questionContent` and `questionTranslations`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionData {
    pub question: Option<QuestionContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionContent {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub translated_title: Option<String>,
    #[serde(default)]
    pub translated_content: Option<String>,
}

/// `data` payload of `problemsetQuestionListV2`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionListData {
    #[serde(rename = "problemsetQuestionListV2")]
    pub question_list: QuestionListPage,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListPage {
    pub questions: Vec<QuestionSummary>,
    #[serde(default)]
    pub total_length: Option<u64>,
    #[serde(default)]
    pub finished_length: Option<u64>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub title_slug: String,
    pub question_frontend_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub translated_title: Option<String>,
    #[serde(default)]
    pub paid_only: Option<bool>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub name_translated: Option<String>,
}

/// `data` payload of `questionTopicsList`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListData {
    pub question_solution_articles: ArticleConnection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleConnection {
    #[serde(default)]
    pub total_num: Option<u64>,
    pub edges: Vec<ArticleEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleEdge {
    pub node: ArticleNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleNode {
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<ArticleAuthor>,
}

impl ArticleNode {
    /// Author profile, absent for deleted or anonymised accounts.
    #[must_use]
    pub fn profile(&self) -> Option<&AuthorProfile> {
        self.author.as_ref()?.profile.as_ref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleAuthor {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile: Option<AuthorProfile>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub user_slug: Option<String>,
}

/// `data` payload of `discussTopic`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleContentData {
    pub solution_article: Option<ArticleContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleContent {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_question_list_page() {
        let page: QuestionListData = serde_json::from_value(serde_json::json!({
            "problemsetQuestionListV2": {
                "questions": [{
                    "id": 1,
                    "titleSlug": "two-sum",
                    "title": "Two Sum",
                    "translatedTitle": "两数之和",
                    "questionFrontendId": "1",
                    "paidOnly": false,
                    "difficulty": "EASY",
                    "topicTags": [{ "name": "Array", "slug": "array", "nameTranslated": "数组" }],
                    "acRate": 0.53
                }],
                "totalLength": 1,
                "finishedLength": 0,
                "hasMore": false
            }
        }))
        .expect("page decodes");

        let page = page.question_list;
        assert!(!page.has_more);
        assert_eq!(page.questions[0].title_slug, "two-sum");
        assert_eq!(page.questions[0].topic_tags[0].slug, "array");
    }

    #[test]
    fn article_without_author_profile_still_decodes() {
        let data = serde_json::from_value::<ArticleListData>(serde_json::json!({
            "questionSolutionArticles": {
                "edges": [
                    { "node": { "slug": "a", "author": { "username": "x" } } },
                    { "node": { "slug": "b", "author": { "username": "y", "profile": null } } },
                    { "node": { "slug": "c", "author": null } }
                ]
            }
        }))
        .expect("listing decodes");

        let edges = &data.question_solution_articles.edges;
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|edge| edge.node.profile().is_none()));
    }
}
