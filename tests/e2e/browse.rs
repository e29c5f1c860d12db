use super::*;
use assert_cmd::assert::{Assert, OutputAssertExt};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run a prepared command off the async runtime
async fn run(mut cmd: Command) -> Assert {
    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();
    output.assert()
}

#[tokio::test]
async fn search_prints_matching_logins() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "items": [{"login": "octocat", "html_url": "https://github.com/octocat"}]
        })))
        .mount(&upstream)
        .await;

    let ctx = TestContext::new();
    let mut cmd = ctx.hubrelay();
    cmd.env("HUBRELAY_API_URL", upstream.uri())
        .args(["search", "octo"]);

    run(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("octocat"));
}

#[tokio::test]
async fn user_not_found_exits_with_failure() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .expect(1)
        .mount(&upstream)
        .await;

    let ctx = TestContext::new();
    let mut cmd = ctx.hubrelay();
    cmd.env("HUBRELAY_API_URL", upstream.uri())
        .args(["user", "ghost"]);

    run(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("Not found: user 'ghost'"));
}

#[tokio::test]
async fn repo_prints_detail_and_commits() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/facebook/react"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "react",
            "full_name": "facebook/react",
            "description": null,
            "html_url": "https://github.com/facebook/react",
            "created_at": "2013-05-24T16:15:54Z"
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/facebook/react/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "sha": "abcdef0123456789",
            "commit": {"message": "Initial commit", "author": {"name": "Jordan"}},
            "author": null
        }])))
        .mount(&upstream)
        .await;

    let ctx = TestContext::new();
    let mut cmd = ctx.hubrelay();
    cmd.env("HUBRELAY_API_URL", upstream.uri())
        .args(["repo", "facebook", "react"]);

    run(cmd).await.success().stdout(
        predicate::str::contains("facebook/react")
            .and(predicate::str::contains("abcdef0 Initial commit (Jordan)")),
    );
}

#[test]
fn empty_search_query_is_rejected() {
    let ctx = TestContext::new();

    ctx.hubrelay()
        .args(["search", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search query is required"));
}
