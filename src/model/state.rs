// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::history::RevisionLog;
use super::tone::{KnobCell, ToneSpec};

/// The aggregate session state presentation code renders from.
///
/// Created once per session (optionally rehydrated from the state file) and
/// mutated only through `ops::ToneController`. The draft text is meaningful
/// only before the first tone application; once the log is non-empty the
/// displayed text is always the log's current snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    log: RevisionLog,
    draft_text: String,
    knob: KnobCell,
    selected_tone: Option<ToneSpec>,
    is_loading: bool,
    error: Option<String>,
    bottom_bar_visible: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            bottom_bar_visible: true,
            ..Self::default()
        }
    }

    pub fn with_parts(draft_text: String, log: RevisionLog) -> Self {
        Self {
            log,
            draft_text,
            ..Self::new()
        }
    }

    pub fn log(&self) -> &RevisionLog {
        &self.log
    }

    pub(crate) fn log_mut(&mut self) -> &mut RevisionLog {
        &mut self.log
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub(crate) fn set_draft_text(&mut self, text: String) {
        self.draft_text = text;
    }

    /// The text currently on screen: the log's snapshot once history exists,
    /// the raw draft before that.
    pub fn current_text(&self) -> &str {
        match self.log.current() {
            Some(revision) => revision.content(),
            None => &self.draft_text,
        }
    }

    pub fn knob(&self) -> KnobCell {
        self.knob
    }

    pub(crate) fn set_knob(&mut self, knob: KnobCell) {
        self.knob = knob;
    }

    pub fn selected_tone(&self) -> Option<&ToneSpec> {
        self.selected_tone.as_ref()
    }

    pub(crate) fn set_selected_tone(&mut self, tone: Option<ToneSpec>) {
        self.selected_tone = tone;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn bottom_bar_visible(&self) -> bool {
        self.bottom_bar_visible
    }

    pub(crate) fn set_bottom_bar_visible(&mut self, visible: bool) {
        self.bottom_bar_visible = visible;
    }
}
