use async_trait::async_trait;
use std::time::Duration;

/// Short excerpt returned by an instant-answer lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSummary {
    pub snippet: String,
    pub source: Option<String>,
}

impl WebSummary {
    pub fn new(snippet: impl Into<String>, source: Option<String>) -> Self {
        Self {
            snippet: snippet.into(),
            source,
        }
    }
}

/// Outcome of a lookup. Every failure is reported as `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebLookup {
    Summary(WebSummary),
    Absent,
}

impl WebLookup {
    #[allow(dead_code)]
    pub fn is_absent(&self) -> bool {
        matches!(self, WebLookup::Absent)
    }
}

impl From<Option<WebSummary>> for WebLookup {
    fn from(summary: Option<WebSummary>) -> Self {
        match summary {
            Some(summary) => WebLookup::Summary(summary),
            None => WebLookup::Absent,
        }
    }
}

/// Trait representing a source of web summaries.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Name of the provider.
    fn name(&self) -> &str;

    /// Look up a summary for `question`, giving up after `timeout`.
    /// Implementations must not make a request for a blank question.
    async fn fetch_summary(&self, question: &str, timeout: Duration) -> WebLookup;
}

/// Provider used when web lookups are switched off.
pub struct NoopProvider;

#[async_trait]
impl SummaryProvider for NoopProvider {
    fn name(&self) -> &str {
        "none"
    }

    async fn fetch_summary(&self, _question: &str, _timeout: Duration) -> WebLookup {
        WebLookup::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_from_option() {
        let summary = WebSummary::new("Paris", None);
        assert_eq!(
            WebLookup::from(Some(summary.clone())),
            WebLookup::Summary(summary)
        );
        assert!(WebLookup::from(None).is_absent());
    }

    #[tokio::test]
    async fn test_noop_provider_is_always_absent() {
        let lookup = NoopProvider
            .fetch_summary("Paris", Duration::from_secs(1))
            .await;
        assert!(lookup.is_absent());
    }
}
