use leetcode_core::control::{ControlPlaneConfig, Language, LeetcodeControlPlane};
use leetcode_core::graphql::{GraphqlClient, GraphqlClientConfig};
use leetcode_mcp::{
    LeetcodeMcp,
    NO_DESCRIPTION_FOUND,
    NO_SLUG_FOUND,
    NO_SOLUTION_ARTICLE_FOUND,
    SOLUTION_ARTICLE_ERROR,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

fn server_for(mock: &MockServer, language: Language) -> LeetcodeMcp {
    let client = GraphqlClient::new(&GraphqlClientConfig::new(format!("{}/graphql/", mock.uri())))
        .expect("client should build");
    LeetcodeMcp::new(LeetcodeControlPlane::new(
        client,
        ControlPlaneConfig::new(language),
    ))
}

fn graphql_op(name: &str) -> MockBuilder {
    Mock::given(method("POST")).and(body_partial_json(json!({ "operationName": name })))
}

async fn mount_single_question(mock: &MockServer, frontend_id: &str, slug: &str) {
    graphql_op("problemsetQuestionListV2")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "problemsetQuestionListV2": {
                    "questions": [{ "questionFrontendId": frontend_id, "titleSlug": slug }],
                    "totalLength": 1,
                    "finishedLength": 1,
                    "hasMore": false
                }
            }
        })))
        .mount(mock)
        .await;
}

#[tokio::test]
async fn slug_lookup_answers_slug_or_sentinel() {
    let mock = MockServer::start().await;
    mount_single_question(&mock, "42", "answer-slug").await;
    let server = server_for(&mock, Language::Chinese);

    assert_eq!(server.lookup_slug("42").await, "answer-slug");
    assert_eq!(server.lookup_slug("43").await, NO_SLUG_FOUND);
    assert_eq!(
        server.lookup_slug_for_path("/repo/0042_42/solution.py").await,
        "answer-slug"
    );
}

#[tokio::test]
async fn slug_lookup_reports_transport_failure_as_sentinel() {
    let mock = MockServer::start().await;
    graphql_op("problemsetQuestionListV2")
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Language::Chinese);

    assert_eq!(server.lookup_slug("1").await, NO_SLUG_FOUND);
}

#[tokio::test]
async fn solution_lookup_without_slug_issues_no_article_requests() {
    let mock = MockServer::start().await;
    mount_single_question(&mock, "42", "answer-slug").await;
    graphql_op("questionTopicsList")
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock)
        .await;
    let server = server_for(&mock, Language::Chinese);

    assert_eq!(server.lookup_solution("43").await, NO_SOLUTION_ARTICLE_FOUND);
    assert_eq!(
        server.lookup_solution_for_path("/repo/0043_43/main.rs").await,
        NO_SOLUTION_ARTICLE_FOUND
    );
}

#[tokio::test]
async fn solution_lookup_reports_exhausted_authors() {
    let mock = MockServer::start().await;
    mount_single_question(&mock, "42", "answer-slug").await;
    graphql_op("questionTopicsList")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "questionSolutionArticles": { "totalNum": 0, "edges": [] } }
        })))
        .expect(2)
        .mount(&mock)
        .await;
    let server = server_for(&mock, Language::Chinese);

    assert_eq!(server.lookup_solution("42").await, SOLUTION_ARTICLE_ERROR);
}

#[tokio::test]
async fn solution_lookup_returns_article_markdown() {
    let mock = MockServer::start().await;
    mount_single_question(&mock, "42", "answer-slug").await;
    graphql_op("questionTopicsList")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "questionSolutionArticles": {
                    "totalNum": 1,
                    "edges": [{
                        "node": {
                            "slug": "oier-answer",
                            "title": "题解",
                            "author": {
                                "username": "ac_oier",
                                "profile": { "realName": "宫水三叶", "userSlug": "ac_oier" }
                            }
                        }
                    }]
                }
            }
        })))
        .mount(&mock)
        .await;
    graphql_op("discussTopic")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "solutionArticle": { "slug": "oier-answer", "content": "## 题解" } }
        })))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Language::Chinese);

    assert_eq!(server.lookup_solution("42").await, "## 题解");
}

#[tokio::test]
async fn description_lookup_reports_failure_as_sentinel() {
    let mock = MockServer::start().await;
    mount_single_question(&mock, "42", "answer-slug").await;
    graphql_op("questionContent")
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock)
        .await;
    let server = server_for(&mock, Language::English);

    assert_eq!(server.lookup_description("42").await, NO_DESCRIPTION_FOUND);
    assert_eq!(server.lookup_description("43").await, NO_DESCRIPTION_FOUND);
}

#[tokio::test]
async fn description_lookup_prefers_local_markdown() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock)
        .await;
    let dir = tempfile::tempdir().expect("temp dir");
    let problem_dir = dir.path().join("0042_42");
    std::fs::create_dir(&problem_dir).expect("problem dir");
    std::fs::write(problem_dir.join("problem.md"), "# Answer\n").expect("cache file");
    let server = server_for(&mock, Language::English);

    let description = server
        .lookup_description_for_path(&problem_dir.join("main.rs").to_string_lossy())
        .await;

    assert_eq!(description, "# Answer\n");
}

#[tokio::test]
async fn description_lookup_by_path_fetches_remote_content() {
    let mock = MockServer::start().await;
    mount_single_question(&mock, "42", "answer-slug").await;
    graphql_op("questionTranslations")
        .and(body_partial_json(json!({ "variables": { "titleSlug": "answer-slug" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "question": { "translatedTitle": "答案", "translatedContent": "<p>答案</p>" } }
        })))
        .expect(1)
        .mount(&mock)
        .await;
    let dir = tempfile::tempdir().expect("temp dir");
    let problem_dir = dir.path().join("0042_42");
    std::fs::create_dir(&problem_dir).expect("problem dir");
    let server = server_for(&mock, Language::Chinese);

    let description = server
        .lookup_description_for_path(&problem_dir.join("main.rs").to_string_lossy())
        .await;

    assert_eq!(description, "<p>答案</p>");
}
