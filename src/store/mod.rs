// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for session state on disk.
//!
//! The store module reads/writes the single fixed-name JSON state file the
//! controller mirrors its persisted subset into on every state change.

pub mod state_file;

pub use state_file::{PersistedState, StateFile, StoreError, WriteDurability, STATE_FILENAME};
