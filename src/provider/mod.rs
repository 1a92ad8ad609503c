// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The rewrite provider seam.
//!
//! Everything upstream of the history core goes through [`RewriteProvider`]:
//! the TUI and the HTTP endpoint both hand a [`RewriteRequest`] to a provider
//! and get back either a [`Rewrite`] or a [`RewriteError`] from the fixed
//! failure taxonomy. Provider calls are blocking and are always run off the
//! UI thread.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ToneSpec;

pub mod demo;
pub mod mistral;

pub use demo::DemoProvider;
pub use mistral::MistralProvider;

/// Upper bound on the text a provider accepts, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// One tone-rewrite request: the source text and the tone to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: ToneSpec,
}

impl RewriteRequest {
    pub fn new(text: impl Into<String>, tone: ToneSpec) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Input validation shared by providers and the HTTP endpoint.
    pub fn validate(&self) -> Result<(), RewriteError> {
        if self.text.trim().is_empty() {
            return Err(RewriteError::Other("Text cannot be empty".to_owned()));
        }
        if self.text.chars().count() > MAX_TEXT_CHARS {
            return Err(RewriteError::Other(format!(
                "Text is too long (max {MAX_TEXT_CHARS} characters)"
            )));
        }
        Ok(())
    }
}

/// A successful rewrite: the transformed text plus a short explanation of
/// how the tone was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    pub rewritten_text: String,
    pub tone_applied: String,
}

/// Failure taxonomy surfaced by rewrite providers.
///
/// The controller only needs the kind; the HTTP endpoint additionally maps
/// kinds to status codes (429 for rate limiting, 500 for the rest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// The provider signalled throttling.
    RateLimited,
    /// Auth or configuration failure (missing/invalid key).
    Configuration(String),
    /// The model produced empty/invalid content or failed to generate.
    Generation(String),
    /// Anything else, including transport failures.
    Other(String),
}

impl RewriteError {
    /// The user-facing message shown in the status panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_owned()
            }
            Self::Configuration(_) => {
                "API configuration error. Please check your settings.".to_owned()
            }
            Self::Generation(_) => {
                "Text generation failed. Please try with different text or try again later."
                    .to_owned()
            }
            Self::Other(message) if !message.trim().is_empty() => message.clone(),
            Self::Other(_) => "An unexpected error occurred. Please try again.".to_owned(),
        }
    }
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => f.write_str("provider rate limited the request"),
            Self::Configuration(detail) => write!(f, "provider configuration error: {detail}"),
            Self::Generation(detail) => write!(f, "text generation failed: {detail}"),
            Self::Other(detail) => write!(f, "rewrite failed: {detail}"),
        }
    }
}

impl std::error::Error for RewriteError {}

/// The external collaborator that turns text plus tone into rewritten text.
///
/// Implementations may be slow (seconds) and may fail; they must be safe to
/// call from a worker thread.
pub trait RewriteProvider: Send + Sync {
    fn provider_id(&self) -> &'static str;

    fn rewrite(&self, request: &RewriteRequest) -> Result<Rewrite, RewriteError>;
}

#[cfg(test)]
mod tests {
    use super::{RewriteError, RewriteRequest, MAX_TEXT_CHARS};
    use crate::model::tone_catalog;

    fn request(text: &str) -> RewriteRequest {
        RewriteRequest::new(text, tone_catalog().into_iter().next().unwrap())
    }

    #[test]
    fn validate_rejects_blank_text() {
        assert!(request("   \n ").validate().is_err());
        assert!(request("hello").validate().is_ok());
    }

    #[test]
    fn validate_rejects_oversized_text() {
        let text = "a".repeat(MAX_TEXT_CHARS + 1);
        let err = request(&text).validate().unwrap_err();
        assert_eq!(
            err.user_message(),
            format!("Text is too long (max {MAX_TEXT_CHARS} characters)")
        );
        assert!(request(&"a".repeat(MAX_TEXT_CHARS)).validate().is_ok());
    }

    #[test]
    fn user_messages_match_the_fixed_taxonomy() {
        assert_eq!(
            RewriteError::RateLimited.user_message(),
            "Too many requests. Please wait a moment and try again."
        );
        assert_eq!(
            RewriteError::Configuration("401".to_owned()).user_message(),
            "API configuration error. Please check your settings."
        );
        assert_eq!(
            RewriteError::Generation("empty".to_owned()).user_message(),
            "Text generation failed. Please try with different text or try again later."
        );
        assert_eq!(
            RewriteError::Other("socket closed".to_owned()).user_message(),
            "socket closed"
        );
        assert_eq!(
            RewriteError::Other(String::new()).user_message(),
            "An unexpected error occurred. Please try again."
        );
    }
}
