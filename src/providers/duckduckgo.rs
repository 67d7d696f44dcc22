use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::WebConfig;
use crate::web_summary::{SummaryProvider, WebLookup, WebSummary};

pub const DEFAULT_ENDPOINT: &str = "https://api.duckduckgo.com/";
pub const DEFAULT_USER_AGENT: &str = "ShizuAi/1.0 (+https://example.com)";

/// Ways a lookup can fail. None of them reach the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("instant-answer API returned {0}")]
    Status(StatusCode),

    #[error("invalid instant-answer payload: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else {
            FetchError::Network(err)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "AbstractText", default)]
    abstract_text: Option<String>,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: Option<String>,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Option<Vec<serde_json::Value>>,
}

impl InstantAnswer {
    /// Prefer the abstract; otherwise take the first related topic that is
    /// an object with some text.
    fn into_summary(self) -> Option<WebSummary> {
        if let Some(snippet) = non_empty(self.abstract_text.as_deref()) {
            return Some(WebSummary::new(
                snippet,
                non_empty(self.abstract_url.as_deref()).map(str::to_string),
            ));
        }

        self.related_topics?.iter().find_map(|topic| {
            let topic = topic.as_object()?;
            let snippet = non_empty(topic.get("Text").and_then(|v| v.as_str()))?;
            let source = non_empty(topic.get("FirstURL").and_then(|v| v.as_str()));
            Some(WebSummary::new(snippet, source.map(str::to_string)))
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// DuckDuckGo instant-answer provider
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    endpoint: String,
    user_agent: String,
    client: reqwest::Client,
}

impl Default for DuckDuckGoProvider {
    fn default() -> Self {
        Self::with_config(DEFAULT_ENDPOINT.to_string(), DEFAULT_USER_AGENT.to_string())
    }
}

impl DuckDuckGoProvider {
    /// Create a provider for a custom endpoint (API-compatible services, tests)
    pub fn with_config(endpoint: String, user_agent: String) -> Self {
        Self {
            endpoint,
            user_agent,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &WebConfig) -> Self {
        Self::with_config(config.endpoint.clone(), config.user_agent.clone())
    }

    async fn request(
        &self,
        question: &str,
        timeout: Duration,
    ) -> Result<Option<WebSummary>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", question),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .header(USER_AGENT, self.user_agent.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;
        let payload: InstantAnswer = serde_json::from_str(&body).map_err(FetchError::Decode)?;
        Ok(payload.into_summary())
    }
}

#[async_trait]
impl SummaryProvider for DuckDuckGoProvider {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn fetch_summary(&self, question: &str, timeout: Duration) -> WebLookup {
        let question = question.trim();
        if question.is_empty() {
            return WebLookup::Absent;
        }

        match self.request(question, timeout).await {
            Ok(Some(summary)) => {
                debug!("Web summary for {:?}: {:?}", question, summary);
                WebLookup::Summary(summary)
            }
            Ok(None) => {
                debug!("No instant answer for {:?}", question);
                WebLookup::Absent
            }
            Err(err) => {
                debug!("Web lookup failed, using offline reply: {}", err);
                WebLookup::Absent
            }
        }
    }
}
