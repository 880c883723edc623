use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::config::{Config, EnvSettings};
use crate::models::{FieldRef, FieldValue};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub body: String,
    pub authorization: Option<String>,
}

/// Local HTTP stub. Every request is recorded and answered by `respond`
/// with a status code and body.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str, &str) -> (u16, String) + Send + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let path = request.url().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                let (status, payload) = respond(&path, &body);
                recorded.lock().unwrap().push(Recorded { path, body, authorization });

                let response = tiny_http::Response::from_string(payload).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }
}

pub fn settings(pairs: &[(&str, &str)]) -> EnvSettings {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvSettings::from_lookup(move |key| {
        owned
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

pub fn config_for(server: &StubServer, extra: &[(&str, &str)]) -> Config {
    let api_url = server.url("/graphql");
    let webhook_url = server.url("/hooks/review");
    let mut pairs = vec![
        ("PROJECT_OWNER", "acme"),
        ("PROJECT_NUMBER", "5"),
        ("GITHUB_GRAPHQL_URL", api_url.as_str()),
        ("MATTERMOST_WEBHOOK_URL", webhook_url.as_str()),
    ];
    pairs.extend_from_slice(extra);
    Config::build(settings(&pairs), "ghp_test".into(), "PVT_kwDOA".into()).unwrap()
}

pub fn single_select(field: &str, name: &str) -> FieldValue {
    FieldValue::SingleSelect {
        field: Some(FieldRef { name: field.to_string() }),
        name: Some(name.to_string()),
    }
}

pub fn text_value(field: &str, text: &str) -> FieldValue {
    FieldValue::Text {
        field: Some(FieldRef { name: field.to_string() }),
        text: Some(text.to_string()),
    }
}

pub const ITEMS_RESPONSE: &str = r#"{
    "data": { "node": { "items": { "nodes": [
        {
            "id": "PVTI_1",
            "content": { "__typename": "Issue", "title": "Flaky test", "url": "https://github.com/acme/api/issues/1",
                         "assignees": { "nodes": [] } },
            "fieldValues": { "nodes": [
                { "__typename": "ProjectV2ItemFieldSingleSelectValue", "field": { "name": "Status" }, "name": "Todo" }
            ] }
        },
        {
            "id": "PVTI_2",
            "content": { "__typename": "PullRequest", "title": "Add rate limiter", "url": "https://github.com/acme/api/pull/2",
                         "assignees": { "nodes": [ { "login": "octocat", "name": "The Octocat" }, { "login": "hubot", "name": null } ] } },
            "fieldValues": { "nodes": [
                { "__typename": "ProjectV2ItemFieldTextValue", "field": { "name": "Title" }, "text": "ignored" },
                { "__typename": "ProjectV2ItemFieldSingleSelectValue", "field": { "name": "Status" }, "name": "In review" }
            ] }
        },
        {
            "id": "PVTI_3",
            "content": { "__typename": "DraftIssue", "title": "Write docs", "assignees": { "nodes": [] } },
            "fieldValues": { "nodes": [
                { "__typename": "ProjectV2ItemFieldDateValue" },
                { "__typename": "ProjectV2ItemFieldSingleSelectValue", "field": { "name": "Status" }, "name": "Done" }
            ] }
        }
    ] } } }
}"#;
