mod common;

use std::collections::HashMap;

use common::Stub;
use pretty_assertions::assert_eq;
use review_notifier::config::{load_env_file, CredentialHelper};
use review_notifier::{run, Config, EnvSettings, NotifierError, NotifierResult, RunOptions, RunOutcome};

struct StaticToken;

impl CredentialHelper for StaticToken {
    fn describe(&self) -> String {
        "static".into()
    }

    fn fetch_token(&self) -> NotifierResult<String> {
        Ok("ghp_from_helper".into())
    }
}

const LOOKUP: &str = r#"{ "data": {
    "user": { "projectsV2": { "nodes": [
        { "id": "PID0", "number": 1, "title": "Backlog" },
        { "id": "PID1", "number": 5, "title": "Sprint" }
    ] } },
    "organization": null
} }"#;

const ITEMS: &str = r#"{ "data": { "node": { "items": { "nodes": [
    { "id": "I1", "content": { "__typename": "Issue", "title": "Crash on save", "url": "u1", "assignees": { "nodes": [] } },
      "fieldValues": { "nodes": [ { "__typename": "ProjectV2ItemFieldSingleSelectValue", "field": { "name": "Status" }, "name": "In review" } ] } },
    { "id": "I2", "content": { "__typename": "PullRequest", "title": "Bump deps", "url": "u2",
                               "assignees": { "nodes": [ { "login": "mona", "name": "" } ] } },
      "fieldValues": { "nodes": [ { "__typename": "ProjectV2ItemFieldSingleSelectValue", "field": { "name": "Status" }, "name": "In review" } ] } },
    { "id": "I3", "content": null,
      "fieldValues": { "nodes": [ { "__typename": "ProjectV2ItemFieldSingleSelectValue", "field": { "name": "Status" }, "name": "Todo" } ] } }
] } } } }"#;

fn github_and_chat(webhook_status: u16) -> Stub {
    Stub::start(move |path, body| match path {
        "/graphql" if body.contains("projectsV2") => (200, LOOKUP.to_string()),
        "/graphql" => (200, ITEMS.to_string()),
        "/hooks/abc" => (webhook_status, String::from("done")),
        _ => (404, String::new()),
    })
}

fn env(stub: &Stub) -> EnvSettings {
    let vars: HashMap<&str, String> = HashMap::from([
        ("PROJECT_OWNER", "acme".to_string()),
        ("PROJECT_NUMBER", "5".to_string()),
        ("PROJECT_VIEW_NUMBER", "4".to_string()),
        ("GITHUB_GRAPHQL_URL", stub.url("/graphql")),
        ("GITHUB_WEB_URL", "https://github.example.com".to_string()),
        ("MATTERMOST_WEBHOOK_URL", stub.url("/hooks/abc")),
        ("MATTERMOST_USERNAME", "review-bot".to_string()),
    ]);
    EnvSettings::from_lookup(|key| vars.get(key).cloned())
}

#[tokio::test]
async fn resolves_fetches_filters_and_posts() {
    let stub = github_and_chat(200);
    let config = Config::resolve(env(&stub), &StaticToken).await.unwrap();
    assert_eq!(config.project_id(), "PID1");
    assert_eq!(config.token(), "ghp_from_helper");

    let outcome = run(&config, RunOptions::default()).await.unwrap();
    assert_eq!(outcome, RunOutcome::Notified(2));

    let posts = stub.bodies_for("/hooks/abc");
    assert_eq!(posts.len(), 1);
    let payload: serde_json::Value = serde_json::from_str(&posts[0]).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({
            "text": "📋 2 items are waiting for review\n[Open the project](https://github.example.com/orgs/acme/projects/5/views/4)",
            "username": "review-bot",
            "attachments": [
                { "color": "warning", "title": "Crash on save", "text": "👤 Unassigned" },
                { "color": "warning", "title": "Bump deps", "text": "👤 mona" }
            ]
        })
    );
}

#[tokio::test]
async fn failed_delivery_is_reported_once() {
    let stub = github_and_chat(503);
    let config = Config::resolve(env(&stub), &StaticToken).await.unwrap();

    let err = run(&config, RunOptions::default()).await.unwrap_err();
    assert!(matches!(err, NotifierError::Delivery(_)));
    assert_eq!(err.kind(), "DeliveryError");
    assert_eq!(stub.bodies_for("/hooks/abc").len(), 1);
}

#[tokio::test]
async fn unknown_project_number_stops_before_fetch() {
    let stub = github_and_chat(200);
    let mut settings = env(&stub);
    settings.project_number = 9;

    let err = Config::resolve(settings, &StaticToken).await.unwrap_err();
    assert_eq!(err.kind(), "ProjectNotFoundError");
    assert_eq!(stub.bodies_for("/graphql").len(), 1);
    assert!(stub.bodies_for("/hooks/abc").is_empty());
}

#[test]
fn explicit_env_file_populates_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notifier.env");
    std::fs::write(&path, "REVIEW_NOTIFIER_IT_MARKER=from-file\n").unwrap();

    load_env_file(Some(&path)).unwrap();
    assert_eq!(std::env::var("REVIEW_NOTIFIER_IT_MARKER").unwrap(), "from-file");
}
