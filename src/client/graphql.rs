use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{REQUEST_TIMEOUT_SECS, USER_AGENT as AGENT};
use crate::error::{NotifierError, NotifierResult, TransportError};
use crate::logging::log_debug;
use crate::models::GraphQLResponse;

/// Bearer-authenticated GraphQL transport. Returns the whole envelope so
/// callers decide how to treat application-level errors.
pub struct GraphQLClient {
    client: Client,
    api_url: String,
}

impl GraphQLClient {
    pub fn new(token: &str, api_url: &str) -> NotifierResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| NotifierError::Credential("token contains invalid header characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| NotifierError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    /// POST `{query, variables}` and decode the envelope. Non-success HTTP
    /// status is an error; GraphQL `errors` are left for the caller.
    pub async fn execute<T>(&self, query: &str, variables: Value) -> Result<GraphQLResponse<T>, TransportError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request_body = GraphQLRequest { query, variables };
        let started = Instant::now();

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log_debug(&format!(
            "POST {} -> {} in {}ms",
            self.api_url,
            status.as_u16(),
            started.elapsed().as_millis()
        ));

        if status != reqwest::StatusCode::OK {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Like `execute`, but any GraphQL error or missing `data` is fatal.
    pub async fn query<T>(&self, query: &str, variables: Value) -> Result<T, TransportError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.execute::<T>(query, variables).await?;
        extract_data(response)
    }
}

pub(crate) fn extract_data<T>(response: GraphQLResponse<T>) -> Result<T, TransportError> {
    if let Some(message) = response.first_error() {
        return Err(TransportError::GraphQL(message.to_string()));
    }

    response.data.ok_or(TransportError::MissingData)
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Value,
}
