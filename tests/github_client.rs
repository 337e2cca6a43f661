//! GitHub client tests against a wiremock server

use devresume::{Config, ErrorKind, GitHubClient};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    let mut config = Config::with_token("test-token");
    config.github_api_url = server.uri();
    config.github_graphql_url = format!("{}/graphql", server.uri());
    GitHubClient::new(&config).expect("Failed to build client")
}

fn repo_json(i: usize) -> Value {
    json!({
        "id": i,
        "name": format!("repo-{}", i),
        "full_name": format!("octocat/repo-{}", i),
        "description": null,
        "html_url": format!("https://github.com/octocat/repo-{}", i),
        "language": "Rust",
        "stargazers_count": i,
        "forks_count": 0,
        "fork": false,
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "owner": {"login": "octocat"}
    })
}

fn repo_page(range: std::ops::Range<usize>) -> Value {
    Value::Array(range.map(repo_json).collect())
}

#[tokio::test]
async fn test_get_user_sends_token_and_parses_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "email": null,
            "bio": null,
            "public_repos": 8,
            "public_gists": 8,
            "followers": 9000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-22T12:13:40Z"
        })))
        .mount(&server)
        .await;

    let user = client_for(&server).get_user("octocat").await.unwrap();
    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.email, None);
    assert_eq!(user.public_gists, 8);
}

#[tokio::test]
async fn test_get_user_maps_404_to_user_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).get_user("ghost").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UserNotFound);
}

#[tokio::test]
async fn test_username_is_percent_encoded_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/foo%3Fx=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "foo",
            "id": 7,
            "avatar_url": "https://avatars.githubusercontent.com/u/7",
            "html_url": "https://github.com/foo",
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-22T12:13:40Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/foo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let user = client_for(&server).get_user("foo?x=1").await.unwrap();
    assert_eq!(user.login, "foo");
}

#[tokio::test]
async fn test_get_user_server_error_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).get_user("octocat").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
}

#[tokio::test]
async fn test_repos_paginate_until_short_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("sort", "updated"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(0..100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(100..105)))
        .expect(1)
        .mount(&server)
        .await;

    let repos = client_for(&server)
        .get_user_repos("octocat", 500)
        .await
        .unwrap();
    assert_eq!(repos.len(), 105);
    assert_eq!(repos[104].name, "repo-104");
}

#[tokio::test]
async fn test_repos_stop_on_empty_page_after_full_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(0..100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let repos = client_for(&server)
        .get_user_repos("octocat", 200)
        .await
        .unwrap();
    assert_eq!(repos.len(), 100);
}

#[tokio::test]
async fn test_repos_stop_at_max_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(0..100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(100..200)))
        .expect(0)
        .mount(&server)
        .await;

    let repos = client_for(&server)
        .get_user_repos("octocat", 100)
        .await
        .unwrap();
    assert_eq!(repos.len(), 100);
}

#[tokio::test]
async fn test_repo_languages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Rust": 9000, "Shell": 120})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/broken/languages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let languages = client.get_repo_languages("octocat", "hello").await.unwrap();
    assert_eq!(languages.get("Rust"), Some(&9000));
    assert_eq!(languages.len(), 2);

    let err = client
        .get_repo_languages("octocat", "broken")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
}

#[tokio::test]
async fn test_contribution_calendar() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({"variables": {"login": "octocat"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": {"contributionsCollection": {"contributionCalendar": {
                "totalContributions": 7,
                "weeks": [{"contributionDays": [
                    {"color": "#40c463", "contributionCount": 7, "date": "2024-05-01"}
                ]}]
            }}}}
        })))
        .mount(&server)
        .await;

    let calendar = client_for(&server)
        .get_contribution_calendar("octocat")
        .await
        .unwrap();
    assert_eq!(calendar.total_contributions, 7);
    assert_eq!(calendar.weeks[0].contribution_days[0].color, "#40c463");
}

#[tokio::test]
async fn test_graphql_null_user_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": null},
            "errors": [{"type": "NOT_FOUND", "message": "Could not resolve to a User with the login of 'ghost'."}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_contribution_calendar("ghost")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UserNotFound);
}

#[tokio::test]
async fn test_graphql_errors_without_data_are_fetch_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Bad credentials"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_merged_pull_requests("octocat", 10)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FetchFailed);
    assert!(err.to_string().contains("Bad credentials"));
}

#[tokio::test]
async fn test_merged_pull_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({"variables": {"login": "octocat", "prLimit": 3}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": {"pullRequests": {"nodes": [
                {
                    "title": "Add retries",
                    "url": "https://github.com/tokio-rs/tokio/pull/1",
                    "mergedAt": "2024-04-02T08:00:00Z",
                    "repository": {
                        "nameWithOwner": "tokio-rs/tokio",
                        "name": "tokio",
                        "description": "A runtime for writing reliable asynchronous applications",
                        "owner": {
                            "login": "tokio-rs",
                            "avatarUrl": "https://avatars.githubusercontent.com/u/20248544",
                            "url": "https://github.com/tokio-rs",
                            "name": "Tokio",
                            "description": null
                        }
                    }
                },
                null
            ]}}}
        })))
        .mount(&server)
        .await;

    let prs = client_for(&server)
        .get_merged_pull_requests("octocat", 3)
        .await
        .unwrap();
    assert_eq!(prs.len(), 1);
    assert_eq!(prs[0].repository.owner.login, "tokio-rs");
    assert_eq!(prs[0].repository.owner.name.as_deref(), Some("Tokio"));
}
