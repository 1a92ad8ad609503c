// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::RevisionId;
use super::tone::{KnobCell, ToneSpec};

/// An immutable snapshot of the text at one point in history.
///
/// `tone == None` marks the baseline (the original, untransformed text).
/// Revisions are never mutated after creation; branch truncation in the log
/// is the only way they go away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    id: RevisionId,
    content: String,
    #[serde(default)]
    tone: Option<ToneSpec>,
    #[serde(default)]
    knob: KnobCell,
}

impl Revision {
    pub fn new(content: impl Into<String>, tone: Option<ToneSpec>, knob: KnobCell) -> Self {
        Self {
            id: RevisionId::mint(),
            content: content.into(),
            tone,
            knob,
        }
    }

    /// The baseline snapshot: no tone, neutral knob.
    pub fn baseline(content: impl Into<String>) -> Self {
        Self::new(content, None, KnobCell::CENTER)
    }

    pub fn revision_id(&self) -> &RevisionId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tone(&self) -> Option<&ToneSpec> {
        self.tone.as_ref()
    }

    pub fn knob(&self) -> KnobCell {
        self.knob
    }

    pub fn is_baseline(&self) -> bool {
        self.tone.is_none()
    }
}
