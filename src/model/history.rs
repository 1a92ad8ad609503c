// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::revision::Revision;
use super::tone::{KnobCell, ToneSpec};

/// Linear undo/redo history: an ordered sequence of revisions plus a cursor.
///
/// Invariants:
/// - the log is empty iff the cursor is `None`;
/// - revision 0, when present, is the baseline (`tone == None`);
/// - appending while the cursor is not at the last index discards every
///   revision after the cursor first (truncate-on-branch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionLog {
    revisions: Vec<Revision>,
    cursor: Option<usize>,
}

impl RevisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a log from persisted parts, validating the invariants.
    ///
    /// Returns `None` when the parts are structurally invalid (cursor out of
    /// range, cursor sentinel mismatched with emptiness, or a non-baseline
    /// revision at index 0); callers fall back to an empty log.
    pub fn from_parts(revisions: Vec<Revision>, cursor: i64) -> Option<Self> {
        if revisions.is_empty() {
            return (cursor == -1).then(Self::new);
        }
        let cursor = usize::try_from(cursor).ok()?;
        if cursor >= revisions.len() || !revisions[0].is_baseline() {
            return None;
        }
        Some(Self {
            revisions,
            cursor: Some(cursor),
        })
    }

    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The cursor in the persisted encoding (`-1` when empty).
    pub fn cursor_sentinel(&self) -> i64 {
        self.cursor.map_or(-1, |cursor| cursor as i64)
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn current(&self) -> Option<&Revision> {
        self.cursor.map(|cursor| &self.revisions[cursor])
    }

    pub fn baseline(&self) -> Option<&Revision> {
        self.revisions.first()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.revisions.len())
    }

    /// Starts history on an empty log: baseline plus first rewrite, in one
    /// step, so undo from the first rewrite always lands on the original
    /// text and the index-0 invariant holds from the beginning.
    ///
    /// Cursor ends on the rewritten revision.
    pub fn begin(
        &mut self,
        baseline_content: impl Into<String>,
        rewritten_content: impl Into<String>,
        tone: ToneSpec,
        knob: KnobCell,
    ) -> &Revision {
        debug_assert!(self.revisions.is_empty(), "begin is only valid on an empty log");
        self.revisions.clear();
        self.revisions.push(Revision::baseline(baseline_content));
        self.revisions
            .push(Revision::new(rewritten_content, Some(tone), knob));
        self.cursor = Some(1);
        &self.revisions[1]
    }

    /// Appends a revision at the cursor, truncating forward history first.
    /// The cursor advances to the new last index.
    ///
    /// Only valid once a baseline exists; an empty log starts with [`begin`]
    /// so index 0 is always the baseline.
    ///
    /// [`begin`]: Self::begin
    pub fn append(
        &mut self,
        content: impl Into<String>,
        tone: Option<ToneSpec>,
        knob: KnobCell,
    ) -> &Revision {
        debug_assert!(!self.revisions.is_empty(), "append requires a baseline; use begin first");
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.revisions.truncate(keep);
        self.revisions.push(Revision::new(content, tone, knob));
        let last = self.revisions.len() - 1;
        self.cursor = Some(last);
        &self.revisions[last]
    }

    /// Moves the cursor back one revision; silent no-op at the start.
    pub fn undo(&mut self) -> Option<&Revision> {
        let cursor = self.cursor.filter(|&cursor| cursor > 0)?;
        self.cursor = Some(cursor - 1);
        Some(&self.revisions[cursor - 1])
    }

    /// Moves the cursor forward one revision; silent no-op at the end.
    pub fn redo(&mut self) -> Option<&Revision> {
        let cursor = self
            .cursor
            .filter(|&cursor| cursor + 1 < self.revisions.len())?;
        self.cursor = Some(cursor + 1);
        Some(&self.revisions[cursor + 1])
    }

    /// Pins the cursor at the baseline without truncating; no-op when empty.
    /// The next `append` truncates from the baseline forward as usual.
    pub fn reset_to_baseline(&mut self) -> Option<&Revision> {
        self.cursor?;
        self.cursor = Some(0);
        self.revisions.first()
    }

    pub fn clear(&mut self) {
        self.revisions.clear();
        self.cursor = None;
    }
}
