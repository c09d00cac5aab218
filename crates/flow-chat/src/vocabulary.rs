//! Vocabulary log built from learner utterances.
//!
//! Each sent message contributes at most one word: candidates longer than
//! five characters are collected from the lowercased utterance and one is
//! picked at random. Words already in the log are not added again.

use chrono::{Local, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Words at or below this many characters are too common to log.
const MIN_WORD_CHARS: usize = 5;

/// How many characters of the source utterance are quoted as the example.
const EXAMPLE_SNIPPET_CHARS: usize = 50;

/// One logged word with its presentation fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The word, lowercased.
    pub word: String,
    /// Placeholder definition shown alongside the word.
    pub definition: String,
    /// Quoted snippet of the utterance the word came from.
    pub example: String,
    /// Local date the word was logged.
    pub date: NaiveDate,
}

/// Accumulated vocabulary for a learner. Survives session resets.
#[derive(Debug, Default)]
pub struct VocabularyLog {
    entries: Vec<VocabularyEntry>,
}

impl VocabularyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one candidate word from an utterance using the process-wide RNG.
    pub fn record(&mut self, utterance: &str) -> Option<&VocabularyEntry> {
        self.record_with(utterance, &mut rand::rng())
    }

    /// Record one candidate word from an utterance.
    ///
    /// Returns the new entry, or `None` when the utterance has no word long
    /// enough or the picked word is already logged.
    pub fn record_with<R: Rng + ?Sized>(
        &mut self,
        utterance: &str,
        rng: &mut R,
    ) -> Option<&VocabularyEntry> {
        let lowered = utterance.to_lowercase();
        let candidates: Vec<&str> = lowered
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_WORD_CHARS)
            .collect();
        let word = *candidates.choose(rng)?;
        if self.entries.iter().any(|entry| entry.word == word) {
            return None;
        }

        tracing::debug!(word = %word, "Logged vocabulary word");
        let snippet: String = utterance.chars().take(EXAMPLE_SNIPPET_CHARS).collect();
        self.entries.push(VocabularyEntry {
            word: word.to_string(),
            definition: "A meaningful word from your conversation".to_string(),
            example: format!("\"{snippet}...\""),
            date: Local::now().date_naive(),
        });
        self.entries.last()
    }

    /// All logged entries, oldest first.
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
