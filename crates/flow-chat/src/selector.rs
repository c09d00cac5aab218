//! Keyword reply selection.
//!
//! Classifies a learner utterance into a reply category by scanning an
//! ordered keyword table, then picks one canned response from that
//! category's pool at uniform random. Classification is first match wins
//! in declaration order, so earlier categories shadow later ones.

use rand::seq::IndexedRandom;
use rand::Rng;

// =============================================================================
// Category Table
// =============================================================================

/// A reply category: trigger keywords plus a fixed pool of responses.
///
/// Keywords are lowercase substrings matched anywhere in the lowercased
/// utterance, not at word boundaries. "great" therefore triggers the food
/// category through "eat". That containment behavior is part of the
/// selection contract.
#[derive(Debug)]
pub struct ReplyCategory {
    /// Stable category name, used in logs and tests.
    pub name: &'static str,
    /// Lowercase trigger substrings.
    pub keywords: &'static [&'static str],
    /// Candidate replies, always non-empty.
    pub replies: &'static [&'static str],
}

impl ReplyCategory {
    /// Whether any keyword occurs in the already-lowercased utterance.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Ordered category table. Declaration order is the tie-break: an utterance
/// matching several categories gets the earliest one.
pub static CATEGORIES: &[ReplyCategory] = &[
    ReplyCategory {
        name: "food",
        keywords: &["biryani", "food", "eat", "cook", "tasty", "delicious"],
        replies: &[
            "That sounds absolutely delicious! What spices do you use in your biryani?",
            "Biryani is such a flavorful dish! Do you prefer Hyderabadi or Lucknowi style?",
            "I'm curious - did you cook it yourself or have it at a restaurant?",
            "That's wonderful! How long does it usually take you to prepare biryani?",
            "I love that you enjoyed it! What makes biryani your favorite food?",
            "Biryani with all those aromatic spices! What's your secret ingredient?",
            "That sounds amazing! Do you cook biryani often, or was this a special occasion?",
            "I'm intrigued! What was the best part about the biryani you had yesterday?",
        ],
    },
    ReplyCategory {
        name: "pets",
        keywords: &["pet", "dog", "cat", "paachu", "animal"],
        replies: &[
            "Paachu sounds like a wonderful name! Is it a dog or a cat?",
            "That's so sweet! What's Paachu's favorite thing to do?",
            "Pets bring so much joy to our lives! How long have you had Paachu?",
            "I'd love to know more! What breed is your pet?",
            "That's adorable! Does your pet have any funny habits?",
            "Pets are amazing companions! What does Paachu like to eat?",
            "How wonderful! Can you tell me a funny story about your pet?",
            "I'm curious - how did you choose the name Paachu for your pet?",
        ],
    },
    ReplyCategory {
        name: "feelings",
        keywords: &["happy", "sad", "excited", "enjoyed", "love", "like"],
        replies: &[
            "That's wonderful to hear! What made you feel that way?",
            "I'm so glad you had a positive experience! What was the highlight?",
            "That's fantastic! Can you tell me more about what happened?",
            "I can feel your enthusiasm! What specifically did you enjoy most?",
            "That's great! How long have you been enjoying this?",
            "I love your positive energy! What else makes you happy?",
            "That's amazing! Do you experience this feeling often?",
            "Wonderful! What inspired you to try this in the first place?",
        ],
    },
    ReplyCategory {
        name: "travel",
        keywords: &["travel", "visit", "place", "city", "country", "went"],
        replies: &[
            "That sounds like an incredible adventure! What was the most memorable moment?",
            "Travel experiences are so enriching! What did you enjoy most about that place?",
            "How fascinating! What were the top attractions you visited?",
            "That's wonderful! Would you recommend it to others? Why?",
            "I'm intrigued! What was the food like in that place?",
            "That sounds exciting! Did you go with family or friends?",
            "How amazing! What surprised you most about that destination?",
            "Travel really opens our minds! What did you learn from this experience?",
        ],
    },
    ReplyCategory {
        name: "work/study",
        keywords: &["work", "job", "study", "learn", "project", "class"],
        replies: &[
            "That sounds like a meaningful pursuit! What do you enjoy most about it?",
            "That's impressive! How long have you been working on this?",
            "I'm curious - what challenges do you face in your work?",
            "That's wonderful! What are your goals in this field?",
            "Tell me more! What's the most interesting part of your job?",
            "That's great! How did you get interested in this area?",
            "I'm intrigued! What skills have you developed so far?",
            "That's admirable! What does a typical day look like for you?",
        ],
    },
    ReplyCategory {
        name: "hobby",
        keywords: &["hobby", "gaming", "play", "interest", "passion"],
        replies: &[
            "That's a cool hobby! How did you get started with it?",
            "I'm curious! What do you enjoy most about this hobby?",
            "That sounds fun! How much time do you spend on it?",
            "That's awesome! Have you achieved any notable milestones?",
            "Tell me more! What makes this hobby special to you?",
            "That's interesting! Do you do this alone or with others?",
            "I'd love to hear more! What's your favorite aspect of it?",
            "That's fantastic! How long have you been pursuing this?",
        ],
    },
    ReplyCategory {
        name: "relationships",
        keywords: &[
            "friend", "family", "people", "relative", "brother", "sister", "mother", "father",
        ],
        replies: &[
            "That's wonderful! What do you value most about your relationships?",
            "Family and friends are so important! What do you like to do together?",
            "That's beautiful! How do they support you?",
            "I'm curious - what's your favorite memory with them?",
            "That's heartwarming! How often do you spend time together?",
            "That's lovely! What makes them special to you?",
            "Tell me more! What qualities do you appreciate in them?",
            "That's great! How do they influence your life?",
        ],
    },
    // "learn" also appears in work/study, which is declared earlier and wins.
    ReplyCategory {
        name: "achievement",
        keywords: &["learn", "understand", "success", "achieve", "improve"],
        replies: &[
            "That's fantastic! Keep pushing forward! What's your next goal?",
            "You're making great progress! How does it feel?",
            "That's impressive! What helped you achieve this?",
            "Wonderful! What did you learn from this experience?",
            "That's excellent! What's your strategy moving forward?",
            "I'm proud of you! What inspired you to work harder?",
            "That's amazing! How did you overcome the challenges?",
            "You're doing great! What's your next step?",
        ],
    },
];

/// Fallback pool used when no category keyword occurs in the utterance.
pub static DEFAULT_CATEGORY: ReplyCategory = ReplyCategory {
    name: "default",
    keywords: &[],
    replies: &[
        "That's really interesting! Can you tell me more about that?",
        "Wow! How did that make you feel?",
        "That's great! Why is that important to you?",
        "Fascinating! What inspired you to do that?",
        "Tell me more! I'd love to know the details.",
        "That's wonderful! What was the best part about it?",
        "I'm curious! How did you experience that?",
        "That's amazing! What happened after that?",
        "I see! What's your perspective on that?",
        "That's cool! Do you do that often?",
        "Interesting! How long have you been doing this?",
        "I love learning about you! Tell me more!",
    ],
};

// =============================================================================
// Selection
// =============================================================================

/// Classify an utterance into its reply category.
///
/// Returns the first category in declaration order with a matching keyword,
/// or [`DEFAULT_CATEGORY`] when nothing matches (including the empty
/// utterance). Matching is case-insensitive.
pub fn reply_pool(utterance: &str) -> &'static ReplyCategory {
    let lowered = utterance.to_lowercase();
    CATEGORIES
        .iter()
        .find(|category| category.matches(&lowered))
        .unwrap_or(&DEFAULT_CATEGORY)
}

/// Select a reply for an utterance using the process-wide RNG.
///
/// The topic is accepted for parity with the chat transport contract but
/// does not currently influence which pool or reply is chosen.
pub fn select_reply(utterance: &str, topic: Option<&str>) -> &'static str {
    select_reply_with(utterance, topic, &mut rand::rng())
}

/// Select a reply for an utterance using a caller-supplied RNG.
///
/// Classification runs exactly once per call and every reply in the chosen
/// pool is equally likely. Tests pass a seeded RNG here to pin the draw.
pub fn select_reply_with<R: Rng + ?Sized>(
    utterance: &str,
    _topic: Option<&str>,
    rng: &mut R,
) -> &'static str {
    let category = reply_pool(utterance);
    let reply = category
        .replies
        .choose(rng)
        .copied()
        .expect("reply pools are never empty");
    tracing::debug!(category = category.name, "Selected reply");
    reply
}

// =============================================================================
// Tests
// =============================================================================
