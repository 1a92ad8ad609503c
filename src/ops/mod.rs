// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The tone-application state machine.
//!
//! `ToneController` owns the session state and applies every mutation. The
//! rewrite round-trip is split sans-io into `begin_apply` / `finish_apply`:
//! begin issues a per-request token and hands back a ticket, the caller runs
//! the provider call wherever it likes, and finish folds the outcome in only
//! if the ticket's token is still the active one. Freshness is decided by
//! token comparison, never by a shared cancellation flag, so a stopped or
//! superseded request can never write a stale result into the log.

use crate::model::{AppState, KnobCell, ToneSpec};
use crate::provider::{Rewrite, RewriteError, RewriteRequest};
use crate::store::{PersistedState, StateFile};

#[cfg(test)]
mod tests;

/// Monotonically increasing identity of one rewrite request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Handle for one in-flight rewrite: the token plus the request that was
/// sent. Returned by `begin_apply` and consumed by `finish_apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteTicket {
    token: RequestToken,
    request: RewriteRequest,
}

impl RewriteTicket {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn request(&self) -> &RewriteRequest {
        &self.request
    }
}

/// What `finish_apply` did with a provider outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Success folded into the log.
    Applied,
    /// Failure surfaced as the state's error message; log untouched.
    Failed,
    /// The request was stopped or superseded; outcome discarded, no state
    /// change either way.
    Stale,
}

/// Owns the session state and orchestrates rewrites, undo/redo and
/// persistence mirroring.
#[derive(Debug)]
pub struct ToneController {
    state: AppState,
    store: Option<StateFile>,
    next_token: u64,
    active: Option<RequestToken>,
}

impl ToneController {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            store: None,
            next_token: 1,
            active: None,
        }
    }

    /// Rehydrates the session from the store and keeps mirroring into it.
    pub fn load_from(store: StateFile) -> Self {
        let state = store.load_or_default().restore();
        Self::new(state).with_store(store)
    }

    pub fn with_store(mut self, store: StateFile) -> Self {
        self.store = Some(store);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn has_active_request(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a tone application.
    ///
    /// The text sent upstream is the draft while the log is empty, and
    /// **always the baseline content** afterwards: tones are alternate
    /// renderings of the one original, never transforms of a transform.
    /// Whitespace-only source text is a silent no-op.
    ///
    /// Starting a new request while another is outstanding supersedes it:
    /// the old ticket's token stops being active, so its late result will be
    /// discarded (freshest wins).
    pub fn begin_apply(&mut self, tone: &ToneSpec) -> Option<RewriteTicket> {
        let text = match self.state.log().baseline() {
            Some(baseline) => baseline.content().to_owned(),
            None => self.state.draft_text().to_owned(),
        };
        if text.trim().is_empty() {
            return None;
        }

        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.active = Some(token);

        self.state.set_loading(true);
        self.state.set_selected_tone(Some(tone.clone()));
        self.state.set_error(None);
        self.state.set_bottom_bar_visible(true);

        Some(RewriteTicket {
            token,
            request: RewriteRequest::new(text, tone.clone()),
        })
    }

    /// Folds a provider outcome into the state.
    ///
    /// A ticket whose token is no longer active (stopped or superseded) is
    /// discarded unconditionally, success and failure alike; cancellation is
    /// not an error and sets no error.
    pub fn finish_apply(
        &mut self,
        ticket: RewriteTicket,
        outcome: Result<Rewrite, RewriteError>,
    ) -> ApplyOutcome {
        if self.active != Some(ticket.token) {
            return ApplyOutcome::Stale;
        }
        self.active = None;

        match outcome {
            Ok(rewrite) => {
                let knob = self.state.knob();
                let tone = ticket.request.tone;
                if self.state.log().is_empty() {
                    // First-ever application: baseline + rewrite in one step,
                    // with the text that was actually sent as the baseline.
                    self.state.log_mut().begin(
                        ticket.request.text,
                        rewrite.rewritten_text,
                        tone.clone(),
                        knob,
                    );
                } else {
                    self.state
                        .log_mut()
                        .append(rewrite.rewritten_text, Some(tone.clone()), knob);
                }
                self.state.set_selected_tone(Some(tone));
                self.state.set_loading(false);
                self.state.set_error(None);
                self.persist();
                ApplyOutcome::Applied
            }
            Err(err) => {
                self.state.set_error(Some(err.user_message()));
                self.state.set_loading(false);
                ApplyOutcome::Failed
            }
        }
    }

    /// Cooperative cancellation: frees the UI immediately and invalidates
    /// the active token. The underlying call is left to resolve into a
    /// discarded `Stale`.
    pub fn stop(&mut self) {
        self.active = None;
        self.state.set_loading(false);
    }

    pub fn undo(&mut self) {
        let Some(revision) = self.state.log_mut().undo() else {
            return;
        };
        let (tone, knob) = (revision.tone().cloned(), revision.knob());
        self.state.set_selected_tone(tone);
        self.state.set_knob(knob);
        self.state.set_error(None);
        self.persist();
    }

    pub fn redo(&mut self) {
        let Some(revision) = self.state.log_mut().redo() else {
            return;
        };
        let (tone, knob) = (revision.tone().cloned(), revision.knob());
        self.state.set_selected_tone(tone);
        self.state.set_knob(knob);
        self.state.set_error(None);
        self.persist();
    }

    /// Back to the baseline revision; cursor pinned at 0, history kept.
    pub fn reset(&mut self) {
        if self.state.log_mut().reset_to_baseline().is_none() {
            return;
        }
        self.state.set_selected_tone(None);
        self.state.set_knob(KnobCell::CENTER);
        self.state.set_error(None);
        self.persist();
    }

    /// Hard reset: log, draft and all UI flags back to initial defaults,
    /// and the persisted state cleared.
    pub fn reset_all(&mut self) {
        self.state = AppState::new();
        self.active = None;
        if let Some(store) = &self.store {
            if let Err(err) = store.clear() {
                eprintln!("inflect: failed to clear persisted state: {err}");
            }
        }
    }

    /// Edits the draft. Only meaningful before the first application; once
    /// revisions exist the displayed text is the log's snapshot and free
    /// edits are ignored so draft and display can never diverge.
    pub fn update_text(&mut self, text: impl Into<String>) {
        if !self.state.log().is_empty() {
            return;
        }
        self.state.set_draft_text(text.into());
        self.state.set_error(None);
        self.persist();
    }

    pub fn set_knob(&mut self, knob: KnobCell) {
        self.state.set_knob(knob);
    }

    pub fn set_selected_tone(&mut self, tone: Option<ToneSpec>) {
        self.state.set_selected_tone(tone);
    }

    pub fn hide_bottom_bar(&mut self) {
        self.state.set_bottom_bar_visible(false);
    }

    /// Best-effort mirror of the persisted subset; storage failures are
    /// logged and swallowed, they never block the in-memory state.
    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.save(&PersistedState::capture(&self.state)) {
            eprintln!("inflect: failed to persist state: {err}");
        }
    }
}
