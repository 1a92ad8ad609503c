// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inflect — terminal tone rewriter with a revision history.
//!
//! Single-crate layout: `model` holds the revision log and tone catalog,
//! `ops` the tone-application controller, `provider` the rewrite backends,
//! `store` the persisted-state file, `server` the local HTTP endpoint, and
//! `tui` the interactive shell.

pub mod model;
pub mod ops;
pub mod provider;
pub mod server;
pub mod store;
pub mod tui;
