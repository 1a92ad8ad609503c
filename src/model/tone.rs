// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ToneId;

/// Cell index into the 3x3 tone matrix.
///
/// Layout: row 0 leans
/// Professional, row 2 leans Casual, column 0 leans Concise, column 2 leans
/// Expanded. Cell 4 (the center) is neutral and maps to no tone.
///
/// Deserialization goes through the range check, so an out-of-range index
/// in a persisted or hand-edited state file is rejected rather than let
/// through as an impossible grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct KnobCell(u8);

impl KnobCell {
    pub const CENTER: KnobCell = KnobCell(4);

    pub fn new(index: u8) -> Option<Self> {
        (index < 9).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn col(self) -> u8 {
        self.0 % 3
    }

    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self(row * 3 + col))
    }

    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Moves one step in the given direction, clamped to the grid.
    pub fn step(self, d_row: i8, d_col: i8) -> Self {
        let row = (i16::from(self.row()) + i16::from(d_row)).clamp(0, 2) as u8;
        let col = (i16::from(self.col()) + i16::from(d_col)).clamp(0, 2) as u8;
        Self(row * 3 + col)
    }

    /// The axis labels a cell highlights, row axis first.
    pub fn axis_labels(self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        match self.row() {
            0 => labels.push("Professional"),
            2 => labels.push("Casual"),
            _ => {}
        }
        match self.col() {
            0 => labels.push("Concise"),
            2 => labels.push("Expanded"),
            _ => {}
        }
        labels
    }
}

impl Default for KnobCell {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TryFrom<u8> for KnobCell {
    type Error = KnobCellOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(KnobCellOutOfRange(index))
    }
}

impl From<KnobCell> for u8 {
    fn from(cell: KnobCell) -> Self {
        cell.index()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnobCellOutOfRange(pub u8);

impl fmt::Display for KnobCellOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "knob cell index {} is outside the 3x3 grid", self.0)
    }
}

impl std::error::Error for KnobCellOutOfRange {}

/// Immutable descriptor of a tone transformation.
///
/// Created once at startup (catalog) or composed from a matrix cell; never
/// mutated. The prompt is the instruction text handed to the rewrite
/// provider verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSpec {
    id: ToneId,
    label: String,
    description: String,
    prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<KnobCell>,
}

impl ToneSpec {
    pub fn new(
        id: ToneId,
        label: impl Into<String>,
        description: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            description: description.into(),
            prompt: prompt.into(),
            icon: None,
            position: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_position(mut self, position: KnobCell) -> Self {
        self.position = Some(position);
        self
    }

    pub fn tone_id(&self) -> &ToneId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn position(&self) -> Option<KnobCell> {
        self.position
    }
}

fn tone_id(value: &str) -> ToneId {
    ToneId::new(value).expect("catalog tone id is a valid segment")
}

/// The built-in preset catalog shown next to the matrix.
pub fn tone_catalog() -> Vec<ToneSpec> {
    vec![
        ToneSpec::new(
            tone_id("formal-professional"),
            "Formal",
            "Professional and structured",
            "Rewrite this text in a formal, professional tone suitable for business communication.",
        )
        .with_icon("📑"),
        ToneSpec::new(
            tone_id("casual-friendly"),
            "Casual",
            "Relaxed and conversational",
            "Rewrite this text in a casual, friendly tone as if talking to a friend.",
        )
        .with_icon("😊"),
        ToneSpec::new(
            tone_id("persuasive-compelling"),
            "Persuasive",
            "Convincing and influential",
            "Rewrite this text in a persuasive, compelling tone that motivates action.",
        )
        .with_icon("🚀"),
        ToneSpec::new(
            tone_id("empathetic-warm"),
            "Empathetic",
            "Understanding and supportive",
            "Rewrite this text in an empathetic, warm tone showing understanding and support.",
        )
        .with_icon("❤️"),
    ]
}

/// Composes the synthetic tone a matrix cell stands for.
///
/// Returns `None` for the neutral center cell. Label, description, prompt
/// and id are derived from the axis labels alone so persisted revisions
/// stay comparable across sessions.
pub fn tone_for_cell(cell: KnobCell) -> Option<ToneSpec> {
    let labels = cell.axis_labels();
    if labels.is_empty() {
        return None;
    }

    let joined_and = labels.join(" and ");
    let description = if labels.len() == 1 {
        format!("A {joined_and} tone.")
    } else {
        format!("A combination of {joined_and} tones.")
    };

    let id = tone_id(&labels.join("-").to_lowercase());
    Some(
        ToneSpec::new(
            id,
            labels.join(", "),
            description,
            format!("Rewrite this text to be more {joined_and}."),
        )
        .with_icon("⚙️")
        .with_position(cell),
    )
}
