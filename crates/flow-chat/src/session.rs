//! Conversation sessions: ordered transcript, topic, and turn handling.
//!
//! A session owns the transcript, the active topic, the vocabulary log,
//! and the speech handles. Turns are strictly serialized: one learner
//! submission appends the user message and the selected reply as an
//! adjacent pair, so the transcript always alternates cleanly.

use uuid::Uuid;

use flow_core::config::SpeechConfig;
use flow_core::types::Message;

use crate::selector;
use crate::speech::{SpeechCapture, SpeechSynthesis};
use crate::topics::Topic;
use crate::vocabulary::{VocabularyEntry, VocabularyLog};

/// Replies carrying this marker are shown but never narrated.
const SPOKEN_REPLY_ERROR_MARKER: &str = "Error";

/// One learner's conversation, from topic selection to reset.
#[derive(Debug)]
pub struct ConversationSession {
    id: Uuid,
    topic: Option<Topic>,
    transcript: Vec<Message>,
    vocabulary: VocabularyLog,
    capture: SpeechCapture,
    synthesis: SpeechSynthesis,
}

impl ConversationSession {
    /// Create a session with no topic selected yet.
    pub fn new(speech: &SpeechConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Session created");
        Self {
            id,
            topic: None,
            transcript: Vec::new(),
            vocabulary: VocabularyLog::new(),
            capture: SpeechCapture::new(speech),
            synthesis: SpeechSynthesis::new(speech),
        }
    }

    /// Create a session already opened on a topic.
    pub fn with_topic(speech: &SpeechConfig, topic: Topic) -> Self {
        let mut session = Self::new(speech);
        session.set_topic(topic);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    /// Read-only view of the ordered transcript.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Vocabulary logged so far, oldest first.
    pub fn vocabulary(&self) -> &[VocabularyEntry] {
        self.vocabulary.entries()
    }

    pub fn capture(&self) -> &SpeechCapture {
        &self.capture
    }

    /// The capture handle, for the shell driving microphone input.
    pub fn capture_mut(&mut self) -> &mut SpeechCapture {
        &mut self.capture
    }

    pub fn synthesis(&self) -> &SpeechSynthesis {
        &self.synthesis
    }

    /// The synthesis handle, for on-demand replay of transcript messages.
    pub fn synthesis_mut(&mut self) -> &mut SpeechSynthesis {
        &mut self.synthesis
    }

    /// Install a topic and seed its greeting as the sole transcript entry.
    ///
    /// Any prior transcript is replaced; picking a topic starts the
    /// conversation over.
    pub fn set_topic(&mut self, topic: Topic) {
        tracing::debug!(session_id = %self.id, topic = %topic.title, "Topic selected");
        self.transcript.clear();
        self.transcript.push(Message::assistant(topic.greeting()));
        self.topic = Some(topic);
    }

    /// Handle one learner submission.
    ///
    /// Blank input is a no-op: nothing is appended and no reply is chosen.
    /// Otherwise the reply selector runs exactly once, the user message and
    /// the chosen reply are appended in that order, one vocabulary candidate
    /// is recorded, and the reply is queued for narration unless it carries
    /// the error marker. Returns the appended reply.
    pub fn send(&mut self, input: &str) -> Option<&Message> {
        if input.trim().is_empty() {
            return None;
        }
        let reply = selector::select_reply(input, self.topic.as_ref().map(|t| t.title.as_str()));
        self.transcript.push(Message::user(input));
        self.transcript.push(Message::assistant(reply));
        if !reply.contains(SPOKEN_REPLY_ERROR_MARKER) {
            self.synthesis.speak(reply);
        }
        self.vocabulary.record(input);
        self.transcript.last()
    }

    /// Clear the transcript and topic and cancel any in-flight speech.
    ///
    /// The vocabulary log survives a reset; it belongs to the learner, not
    /// to one conversation.
    pub fn reset(&mut self) {
        tracing::debug!(session_id = %self.id, "Session reset");
        self.transcript.clear();
        self.topic = None;
        self.synthesis.cancel();
        if self.capture.is_listening() {
            let _ = self.capture.stop();
        }
    }
}

impl Drop for ConversationSession {
    /// Teardown cancels any in-flight narration.
    fn drop(&mut self) {
        self.synthesis.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::preset_topics;
    use flow_core::types::Role;

    fn new_session() -> ConversationSession {
        ConversationSession::new(&SpeechConfig::default())
    }

    // ---- turns ----

    #[test]
    fn test_send_appends_user_then_assistant() {
        let mut session = new_session();
        session.send("I had biryani yesterday");
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[0].text, "I had biryani yesterday");
        assert_eq!(transcript[1].role, Role::Assistant);
    }

    #[test]
    fn test_reply_comes_from_matched_pool() {
        let mut session = new_session();
        let reply = session.send("I had biryani yesterday").unwrap().text.clone();
        assert!(selector::reply_pool("I had biryani yesterday")
            .replies
            .contains(&reply.as_str()));
    }

    #[test]
    fn test_send_returns_the_reply_message() {
        let mut session = new_session();
        let reply = session.send("hmm okay sure").unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut session = new_session();
        assert!(session.send("").is_none());
        assert!(session.send("   ").is_none());
        assert!(session.send("\n\t").is_none());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_turns_accumulate_in_pairs() {
        let mut session = new_session();
        session.send("I had biryani yesterday");
        session.send("my dog chased a squirrel");
        session.send("we went to the mountains");
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 6);
        for pair in transcript.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }

    // ---- topics ----

    #[test]
    fn test_set_topic_seeds_greeting() {
        let mut session = new_session();
        let topic = preset_topics()[2].clone();
        let greeting = topic.greeting();
        session.set_topic(topic);
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, Role::Assistant);
        assert_eq!(transcript[0].text, greeting);
        assert!(session.topic().is_some());
    }

    #[test]
    fn test_set_topic_replaces_prior_transcript() {
        let mut session = new_session();
        session.send("hmm okay sure");
        session.set_topic(Topic::custom("Music").unwrap());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.topic().unwrap().title, "Music");
    }

    #[test]
    fn test_with_topic_opens_seeded() {
        let topic = preset_topics()[0].clone();
        let session = ConversationSession::with_topic(&SpeechConfig::default(), topic);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.topic().unwrap().title, "Daily Routines");
    }

    // ---- reset ----

    #[test]
    fn test_reset_clears_transcript_and_topic() {
        let mut session = new_session();
        session.set_topic(preset_topics()[0].clone());
        session.send("I had biryani yesterday");
        session.reset();
        assert!(session.transcript().is_empty());
        assert!(session.topic().is_none());
    }

    #[test]
    fn test_vocabulary_survives_reset() {
        let mut session = new_session();
        session.send("I had biryani yesterday");
        let logged = session.vocabulary().len();
        assert!(logged > 0);
        session.reset();
        assert_eq!(session.vocabulary().len(), logged);
    }

    #[test]
    fn test_reset_cancels_narration() {
        let mut session = new_session();
        session.send("I had biryani yesterday");
        assert!(session.synthesis().is_speaking());
        session.reset();
        assert!(!session.synthesis().is_speaking());
    }

    #[test]
    fn test_reset_stops_capture() {
        let mut session = new_session();
        session.capture_mut().start().unwrap();
        session.reset();
        assert!(!session.capture().is_listening());
    }

    #[test]
    fn test_session_usable_after_reset() {
        let mut session = new_session();
        session.send("I had biryani yesterday");
        session.reset();
        session.send("my dog chased a squirrel");
        assert_eq!(session.transcript().len(), 2);
    }

    // ---- narration ----

    #[test]
    fn test_reply_is_narrated_at_reply_rate() {
        let mut session = new_session();
        let reply = session.send("I had biryani yesterday").unwrap().text.clone();
        let current = session.synthesis().current().unwrap();
        assert_eq!(current.text, reply);
        assert!((current.rate - 0.9).abs() < f32::EPSILON);
    }

    // ---- identity ----

    #[test]
    fn test_sessions_have_unique_ids() {
        let a = new_session();
        let b = new_session();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_vocabulary_recorded_on_send() {
        let mut session = new_session();
        session.send("I had biryani yesterday");
        assert_eq!(session.vocabulary().len(), 1);
    }

    #[test]
    fn test_no_vocabulary_from_short_words() {
        let mut session = new_session();
        session.send("my cat is fat");
        assert!(session.vocabulary().is_empty());
    }
}
