// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Color constants for the TUI chrome.

use ratatui::prelude::Color;

pub(crate) const FOCUS_COLOR: Color = Color::LightGreen;
pub(crate) const PANEL_COLOR: Color = Color::DarkGray;
pub(crate) const ERROR_COLOR: Color = Color::LightRed;
pub(crate) const LOADING_COLOR: Color = Color::LightYellow;
pub(crate) const KNOB_COLOR: Color = Color::LightCyan;
pub(crate) const AXIS_LABEL_COLOR: Color = Color::Gray;
pub(crate) const FOOTER_LABEL_COLOR: Color = Color::Gray;
pub(crate) const FOOTER_KEY_COLOR: Color = Color::Cyan;
