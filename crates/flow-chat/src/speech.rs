//! Speech capture and synthesis lifecycle handles.
//!
//! In-process models of the recognition and synthesis handles an embedding
//! shell drives: they enforce the start, stop, and cancel rules and hold
//! the text in flight. Actual audio I/O belongs to the platform shell.

use std::fmt;

use flow_core::config::SpeechConfig;

use crate::error::ChatError;

// =============================================================================
// Capture State
// =============================================================================

/// Lifecycle state of the speech capture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureState {
    /// Not capturing. The handle can be started.
    Idle,
    /// Actively capturing microphone input.
    Listening,
}

impl CaptureState {
    /// Whether a transition from `self` to `target` is legal.
    pub fn can_transition_to(&self, target: CaptureState) -> bool {
        matches!(
            (self, target),
            (CaptureState::Idle, CaptureState::Listening)
                | (CaptureState::Listening, CaptureState::Idle)
        )
    }
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "idle"),
            CaptureState::Listening => write!(f, "listening"),
        }
    }
}

// =============================================================================
// Speech Capture
// =============================================================================

/// Speech-to-text capture handle.
///
/// One per session. Starting while already listening is rejected rather
/// than restarted. Final transcripts accumulate in a pending buffer the
/// shell drains into the message input.
#[derive(Debug)]
pub struct SpeechCapture {
    locale: String,
    continuous: bool,
    state: CaptureState,
    pending: String,
}

impl SpeechCapture {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            continuous: config.continuous,
            state: CaptureState::Idle,
            pending: String::new(),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == CaptureState::Listening
    }

    /// Text accumulated from final transcripts, not yet drained.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Begin capturing. Fails if capture is already active.
    pub fn start(&mut self) -> Result<(), ChatError> {
        if self.is_listening() {
            return Err(ChatError::CaptureAlreadyActive);
        }
        self.state = CaptureState::Listening;
        tracing::debug!(locale = %self.locale, "Speech capture started");
        Ok(())
    }

    /// Stop capturing. Fails if capture is not active.
    pub fn stop(&mut self) -> Result<(), ChatError> {
        if !self.is_listening() {
            return Err(ChatError::CaptureNotActive);
        }
        self.state = CaptureState::Idle;
        tracing::debug!("Speech capture stopped");
        Ok(())
    }

    /// Accept a recognition result from the shell.
    ///
    /// Final transcripts append to the pending buffer with a trailing
    /// space; interim ones are display-only and not accumulated. In
    /// non-continuous mode the handle goes idle after the first final
    /// transcript.
    pub fn push_transcript(&mut self, transcript: &str, is_final: bool) -> Result<(), ChatError> {
        if !self.is_listening() {
            return Err(ChatError::CaptureNotActive);
        }
        if is_final {
            self.pending.push_str(transcript);
            self.pending.push(' ');
            if !self.continuous {
                self.state = CaptureState::Idle;
            }
        }
        Ok(())
    }

    /// Handle a recognition error: capture goes idle, pending text is kept.
    pub fn fail(&mut self, reason: &str) {
        tracing::debug!(error = %reason, "Speech capture error");
        self.state = CaptureState::Idle;
    }

    /// Take everything captured so far, leaving the buffer empty.
    pub fn take_pending(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }
}

// =============================================================================
// Speech Synthesis
// =============================================================================

/// One utterance queued for narration.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
}

/// Text-to-speech handle.
///
/// Replies are narrated at the reply rate; on-demand replays use the
/// slightly slower replay rate and cancel whatever is in flight first.
/// Cancel is always safe, including when nothing is playing.
#[derive(Debug)]
pub struct SpeechSynthesis {
    reply_rate: f32,
    replay_rate: f32,
    current: Option<Utterance>,
}

impl SpeechSynthesis {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            reply_rate: config.reply_rate,
            replay_rate: config.replay_rate,
            current: None,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.current.is_some()
    }

    /// The utterance currently in flight, if any.
    pub fn current(&self) -> Option<&Utterance> {
        self.current.as_ref()
    }

    /// Narrate an assistant reply at the reply rate.
    pub fn speak(&mut self, text: &str) {
        self.current = Some(Utterance {
            text: text.to_string(),
            rate: self.reply_rate,
        });
        tracing::debug!(rate = self.reply_rate, "Narrating reply");
    }

    /// Replay a transcript message at the replay rate, canceling anything
    /// already in flight.
    pub fn replay(&mut self, text: &str) {
        self.cancel();
        self.current = Some(Utterance {
            text: text.to_string(),
            rate: self.replay_rate,
        });
        tracing::debug!(rate = self.replay_rate, "Replaying message");
    }

    /// Stop playback. Safe to call when nothing is playing.
    pub fn cancel(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("Speech synthesis canceled");
        }
    }

    /// Mark the in-flight utterance as finished.
    pub fn finish(&mut self) {
        self.current = None;
    }
}

// =============================================================================
// Tests
// =============================================================================
