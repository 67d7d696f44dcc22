use log::info;
use std::time::Duration;

use crate::responder::{OfflineResponder, fill};
use crate::web_summary::{SummaryProvider, WebLookup, WebSummary};

/// Final reply for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub reply: String,
    /// True only when a web snippet is part of `reply`
    pub used_web: bool,
}

/// Combines the canned reply with an optional web summary.
pub struct AnswerResolver {
    responder: OfflineResponder,
    provider: Box<dyn SummaryProvider>,
}

impl AnswerResolver {
    pub fn new(responder: OfflineResponder, provider: Box<dyn SummaryProvider>) -> Self {
        Self {
            responder,
            provider,
        }
    }

    /// Answer `question`. The provider is only consulted when `use_web` is set;
    /// any lookup failure leaves the offline reply on its own.
    pub async fn answer(&self, question: &str, use_web: bool, timeout: Duration) -> Answer {
        let offline_reply = self.responder.reply(question);

        let lookup = if use_web {
            self.provider.fetch_summary(question, timeout).await
        } else {
            WebLookup::Absent
        };

        match lookup {
            WebLookup::Summary(summary) => {
                info!("Answer enriched by {}", self.provider.name());
                Answer {
                    reply: self.compose(&offline_reply, &summary),
                    used_web: true,
                }
            }
            WebLookup::Absent => Answer {
                reply: offline_reply,
                used_web: false,
            },
        }
    }

    fn compose(&self, offline_reply: &str, summary: &WebSummary) -> String {
        let phrases = self.responder.phrases();
        let mut text = format!(
            "{}\n\n{} {}",
            offline_reply, phrases.web_label, summary.snippet
        );
        if let Some(source) = &summary.source {
            text.push('\n');
            text.push_str(&phrases.source_label);
            text.push(' ');
            text.push_str(source);
        }
        fill(&text, self.responder.wrap_width())
    }
}
