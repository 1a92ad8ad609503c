// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::history::RevisionLog;
use super::ids::ToneId;
use super::tone::{KnobCell, ToneSpec};

pub(crate) fn tone(label: &str) -> ToneSpec {
    let id = ToneId::new(label.to_lowercase()).expect("fixture tone id");
    ToneSpec::new(
        id,
        label,
        format!("A {label} tone."),
        format!("Rewrite this text to be more {label}."),
    )
}

/// A small log: baseline plus two alternate renderings, cursor on the last.
pub(crate) fn log_with_two_rewrites() -> RevisionLog {
    let mut log = RevisionLog::new();
    log.begin(
        "We need to talk about the quarterly numbers.",
        "Hey, quick chat about the Q numbers?",
        tone("Casual"),
        KnobCell::CENTER,
    );
    log.append(
        "I would like to schedule a discussion regarding the quarterly figures.",
        Some(tone("Formal")),
        KnobCell::new(1).expect("cell"),
    );
    log
}
