// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Tones, revisions, the linear undo/redo log and the aggregate session
//! state the TUI renders from.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod history;
pub mod ids;
pub mod revision;
pub mod state;
pub mod tone;

pub use history::RevisionLog;
pub use ids::{Id, IdError, RevisionId, ToneId};
pub use revision::Revision;
pub use state::AppState;
pub use tone::{tone_catalog, tone_for_cell, KnobCell, KnobCellOutOfRange, ToneSpec};
