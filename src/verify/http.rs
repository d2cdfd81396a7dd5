//! HTTP smoke check issued against a freshly resolved invocation URL.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::Result;

/// Name posted to the deployed function; the response is expected to echo
/// it back alongside a greeting.
pub const PAYLOAD_NAME: &str = "World";

#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub url: String,
    pub body: Option<Value>,
    /// Serialize the body as JSON with the matching content type; plain
    /// text otherwise.
    pub json: bool,
}

impl RequestSpec {
    /// The default smoke request for a function URL.
    pub fn default_for(url: &str) -> Self {
        Self {
            url: url.to_string(),
            body: Some(json!({ "name": PAYLOAD_NAME })),
            json: true,
        }
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request and return the response body as text.
    async fn send_request(&self, spec: &RequestSpec) -> Result<String>;
}

pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send_request(&self, spec: &RequestSpec) -> Result<String> {
        let mut request = self.client.post(&spec.url);
        if let Some(body) = &spec.body {
            request = if spec.json {
                request.json(body)
            } else {
                request.body(body.to_string())
            };
        }
        let response = request.send().await?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_posts_the_greeting_payload() {
        let spec = RequestSpec::default_for("https://appX.azurewebsites.net/api/funcAB12");
        assert_eq!(spec.url, "https://appX.azurewebsites.net/api/funcAB12");
        assert_eq!(spec.body, Some(json!({ "name": "World" })));
        assert!(spec.json);
    }
}
