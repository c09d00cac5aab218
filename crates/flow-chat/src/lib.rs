//! Conversation engine for Flow.
//!
//! Home of the keyword reply selector, conversation sessions with topic
//! seeding, the vocabulary log, speech handle lifecycle models, and the
//! non-authenticating sign-in profile. The HTTP surface in `flow-api`
//! drives the same selector this crate's sessions use.

pub mod error;
pub mod profile;
pub mod selector;
pub mod session;
pub mod speech;
pub mod topics;
pub mod vocabulary;

pub use error::ChatError;
pub use profile::UserProfile;
pub use selector::{reply_pool, select_reply, select_reply_with, ReplyCategory};
pub use session::ConversationSession;
pub use speech::{CaptureState, SpeechCapture, SpeechSynthesis, Utterance};
pub use topics::{preset_topics, Topic, TopicKind};
pub use vocabulary::{VocabularyEntry, VocabularyLog};
