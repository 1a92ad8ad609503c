// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Rewrite, RewriteError, RewriteProvider, RewriteRequest};

/// Deterministic offline provider used by `--demo` and tests.
///
/// It does not attempt a real rewrite; it tags the text with the tone label
/// so every step of the history machinery can be exercised without a network
/// or an API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

impl RewriteProvider for DemoProvider {
    fn provider_id(&self) -> &'static str {
        "demo"
    }

    fn rewrite(&self, request: &RewriteRequest) -> Result<Rewrite, RewriteError> {
        request.validate()?;
        Ok(Rewrite {
            rewritten_text: format!("[{}] {}", request.tone.label(), request.text.trim()),
            tone_applied: format!(
                "Tagged the text as a stand-in for the {} tone (demo mode).",
                request.tone.label()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DemoProvider;
    use crate::model::tone_catalog;
    use crate::provider::{RewriteProvider, RewriteRequest};

    #[test]
    fn demo_rewrite_is_deterministic_and_tone_tagged() {
        let tone = tone_catalog().into_iter().find(|t| t.label() == "Formal").unwrap();
        let request = RewriteRequest::new("hello there", tone);

        let first = DemoProvider.rewrite(&request).unwrap();
        let second = DemoProvider.rewrite(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.rewritten_text, "[Formal] hello there");
    }
}
