//! Conversation topics and the greetings that open them.
//!
//! A session starts from one of the built-in preset topics or from a
//! learner-typed custom topic. Selecting a topic seeds the transcript with
//! an assistant greeting whose wording differs slightly between the two.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Emoji attached to learner-typed topics.
const CUSTOM_TOPIC_EMOJI: &str = "💬";

/// The built-in topic catalog, in display order.
static PRESET_TOPICS: &[(&str, &str)] = &[
    ("Daily Routines", "🌅"),
    ("Travel & Culture", "✈️"),
    ("Food & Cooking", "🍽️"),
    ("Hobbies & Interests", "🎮"),
    ("Career & Education", "📚"),
    ("Movies & Entertainment", "🎬"),
];

/// How a topic entered the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKind {
    /// Picked from the built-in catalog.
    Preset,
    /// Typed by the learner.
    Custom,
}

/// A conversation topic: title, display emoji, and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub emoji: String,
    pub kind: TopicKind,
}

impl Topic {
    /// Create a learner-typed topic. The title is kept exactly as typed;
    /// only blank (all-whitespace) titles are rejected.
    pub fn custom(title: &str) -> Result<Topic, ChatError> {
        if title.trim().is_empty() {
            return Err(ChatError::EmptyTopic);
        }
        Ok(Topic {
            title: title.to_string(),
            emoji: CUSTOM_TOPIC_EMOJI.to_string(),
            kind: TopicKind::Custom,
        })
    }

    /// Assistant greeting seeded into a fresh transcript for this topic.
    pub fn greeting(&self) -> String {
        match self.kind {
            TopicKind::Preset => format!(
                "Great! Let's talk about \"{}\". What's something interesting you'd like to share?",
                self.title
            ),
            TopicKind::Custom => format!(
                "Great! Let's talk about \"{}\". What would you like to share?",
                self.title
            ),
        }
    }
}

/// The built-in topics offered before a session opens.
pub fn preset_topics() -> Vec<Topic> {
    PRESET_TOPICS
        .iter()
        .map(|(title, emoji)| Topic {
            title: title.to_string(),
            emoji: emoji.to_string(),
            kind: TopicKind::Preset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_catalog_order() {
        let topics = preset_topics();
        assert_eq!(topics.len(), 6);
        assert_eq!(topics[0].title, "Daily Routines");
        assert_eq!(topics[2].title, "Food & Cooking");
        assert_eq!(topics[5].title, "Movies & Entertainment");
        assert!(topics.iter().all(|t| t.kind == TopicKind::Preset));
        assert!(topics.iter().all(|t| !t.emoji.is_empty()));
    }

    #[test]
    fn test_custom_topic_gets_default_emoji() {
        let topic = Topic::custom("Music").unwrap();
        assert_eq!(topic.title, "Music");
        assert_eq!(topic.emoji, CUSTOM_TOPIC_EMOJI);
        assert_eq!(topic.kind, TopicKind::Custom);
    }

    #[test]
    fn test_custom_topic_keeps_title_as_typed() {
        let topic = Topic::custom("  Street Food  ").unwrap();
        assert_eq!(topic.title, "  Street Food  ");
        assert!(topic
            .greeting()
            .contains("Let's talk about \"  Street Food  \""));
    }

    #[test]
    fn test_blank_custom_topic_is_rejected() {
        assert!(matches!(Topic::custom(""), Err(ChatError::EmptyTopic)));
        assert!(matches!(Topic::custom("   "), Err(ChatError::EmptyTopic)));
    }

    #[test]
    fn test_preset_greeting_wording() {
        let topic = &preset_topics()[2];
        assert_eq!(
            topic.greeting(),
            "Great! Let's talk about \"Food & Cooking\". What's something interesting you'd like to share?"
        );
    }

    #[test]
    fn test_custom_greeting_wording() {
        let topic = Topic::custom("Music").unwrap();
        assert_eq!(
            topic.greeting(),
            "Great! Let's talk about \"Music\". What would you like to share?"
        );
    }
}
