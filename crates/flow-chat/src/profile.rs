//! Learner profile derived from the sign-in form.
//!
//! Sign-in is a display-name derivation step, not authentication: any
//! non-blank email and access key pair is accepted, nothing is verified,
//! and the access key is discarded after the presence check.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Display identity for a signed-in learner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    /// Local part of the email with its first character uppercased.
    pub display_name: String,
}

impl UserProfile {
    /// Accept a credential pair and derive the display name.
    ///
    /// Both fields must be non-blank; beyond that nothing is checked.
    pub fn sign_in(email: &str, access_key: &str) -> Result<Self, ChatError> {
        let email = email.trim();
        if email.is_empty() || access_key.trim().is_empty() {
            return Err(ChatError::MissingCredentials);
        }
        let local = email.split('@').next().unwrap_or(email);
        let profile = Self {
            email: email.to_string(),
            display_name: capitalize(local),
        };
        tracing::debug!(name = %profile.display_name, "Learner signed in");
        Ok(profile)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
