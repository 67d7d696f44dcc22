use serde::{Deserialize, Serialize};

/// Column width used when no other width is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 90;

/// Trigger phrases and canned replies for answers that need no network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrasebook {
    /// Substrings that select the greeting reply
    pub greeting_triggers: Vec<String>,

    /// Substrings that select the self-introduction
    pub identity_triggers: Vec<String>,

    /// Reply for an empty question
    pub empty_reply: String,

    pub greeting_reply: String,

    pub identity_reply: String,

    /// Reply when no trigger matches, wrapped before use
    pub fallback_reply: String,

    /// Label placed in front of a web snippet
    pub web_label: String,

    /// Label placed in front of the snippet's source URL
    pub source_label: String,
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            greeting_triggers: vec!["bonjour".to_string(), "salut".to_string()],
            identity_triggers: vec!["qui es".to_string(), "shizu".to_string()],
            empty_reply: "Je suis ShizuAi. Pose-moi une question pour commencer !".to_string(),
            greeting_reply:
                "Bonjour ! Je suis ShizuAi, prête à t'aider. Tu cherches quoi aujourd'hui ?"
                    .to_string(),
            identity_reply:
                "Je suis ShizuAi, une IA en Rust qui peut répondre et chercher des infos sur le web."
                    .to_string(),
            fallback_reply: "Je vais analyser ta question et fournir une réponse concise. \
                Active la recherche web si tu veux que je récupère aussi une source en ligne."
                .to_string(),
            web_label: "Recherche web :".to_string(),
            source_label: "Source :".to_string(),
        }
    }
}

impl Phrasebook {
    /// Lower-case every trigger and drop empty ones so matching stays
    /// case-insensitive and an empty entry never matches everything.
    fn normalized(mut self) -> Self {
        for triggers in [&mut self.greeting_triggers, &mut self.identity_triggers] {
            *triggers = triggers
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
        }
        self
    }
}

/// Maps a question onto one of the canned replies.
#[derive(Debug, Clone)]
pub struct OfflineResponder {
    phrases: Phrasebook,
    wrap_width: usize,
}

impl Default for OfflineResponder {
    fn default() -> Self {
        Self::new(Phrasebook::default(), DEFAULT_WRAP_WIDTH)
    }
}

impl OfflineResponder {
    pub fn new(phrases: Phrasebook, wrap_width: usize) -> Self {
        Self {
            phrases: phrases.normalized(),
            wrap_width,
        }
    }

    pub fn phrases(&self) -> &Phrasebook {
        &self.phrases
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    /// Pick the canned reply for `question`. First matching rule wins:
    /// empty input, greeting, self-introduction, then the wrapped fallback.
    pub fn reply(&self, question: &str) -> String {
        let question = question.trim();
        if question.is_empty() {
            return self.phrases.empty_reply.clone();
        }

        let lower = question.to_lowercase();
        if contains_any(&lower, &self.phrases.greeting_triggers) {
            return self.phrases.greeting_reply.clone();
        }
        if contains_any(&lower, &self.phrases.identity_triggers) {
            return self.phrases.identity_reply.clone();
        }

        fill(&self.phrases.fallback_reply, self.wrap_width)
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}

/// Wrap `text` to `width` columns, keeping existing line breaks.
pub fn fill(text: &str, width: usize) -> String {
    textwrap::fill(text, width.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_gets_prompt() {
        let responder = OfflineResponder::default();
        assert_eq!(responder.reply(""), Phrasebook::default().empty_reply);
        assert_eq!(responder.reply("   \t\n"), Phrasebook::default().empty_reply);
    }

    #[test]
    fn test_greeting_wins_regardless_of_case_and_content() {
        let responder = OfflineResponder::default();
        let greeting = Phrasebook::default().greeting_reply;

        assert_eq!(responder.reply("Bonjour"), greeting);
        assert_eq!(responder.reply("BONJOUR, qui es-tu ?"), greeting);
        assert_eq!(responder.reply("eh salut shizu"), greeting);
    }

    #[test]
    fn test_identity_triggers() {
        let responder = OfflineResponder::default();
        let identity = Phrasebook::default().identity_reply;

        assert_eq!(responder.reply("Qui es-tu ?"), identity);
        assert_eq!(responder.reply("tu t'appelles ShizuAi ?"), identity);
    }

    #[test]
    fn test_fallback_is_wrapped() {
        let responder = OfflineResponder::default();
        let reply = responder.reply("Quelle est la capitale de la France ?");

        assert!(reply.starts_with("Je vais analyser ta question"));
        assert!(reply.contains('\n'));
        assert!(reply.lines().all(|line| line.chars().count() <= DEFAULT_WRAP_WIDTH));
    }

    #[test]
    fn test_reply_is_deterministic() {
        let responder = OfflineResponder::default();
        for question in ["", "salut", "qui es tu", "météo demain"] {
            assert_eq!(responder.reply(question), responder.reply(question));
        }
    }

    #[test]
    fn test_custom_triggers_are_case_insensitive() {
        let phrases = Phrasebook {
            greeting_triggers: vec!["  Hello ".to_string(), String::new()],
            ..Phrasebook::default()
        };
        let responder = OfflineResponder::new(phrases, 40);

        assert_eq!(responder.reply("hello there"), responder.phrases().greeting_reply);
        // the blank trigger must not match every question
        assert_ne!(responder.reply("quoi de neuf"), responder.phrases().greeting_reply);
        assert!(
            responder
                .reply("quoi de neuf")
                .lines()
                .all(|line| line.chars().count() <= 40)
        );
    }

    #[test]
    fn test_fill_keeps_blank_lines() {
        let text = fill("premier paragraphe\n\nsecond paragraphe", 90);
        assert_eq!(text, "premier paragraphe\n\nsecond paragraphe");
    }
}
