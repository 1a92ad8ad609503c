// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Inflect-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Inflect and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{AppState, Revision, RevisionLog};


/// Fixed name of the state file inside the state directory.
pub const STATE_FILENAME: &str = "inflect-state.json";

/// Durability level for state writes.
///
/// `Fast` is an atomic temp-file + rename; `Durable` additionally fsyncs the
/// file (and the directory where supported) and is opt-in via
/// `--durable-writes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteDurability {
    #[default]
    Fast,
    Durable,
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// The persisted subset of the session state.
///
/// Only the draft text, the revisions and the cursor are mirrored to disk;
/// transient UI flags (loading, error, bar visibility) are not. The cursor
/// keeps the `-1`-when-empty sentinel in the on-disk encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub draft_text: String,
    pub revisions: Vec<Revision>,
    pub cursor: i64,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self::safe_default()
    }
}

impl PersistedState {
    pub fn capture(state: &AppState) -> Self {
        Self {
            draft_text: state.draft_text().to_owned(),
            revisions: state.log().revisions().to_vec(),
            cursor: state.log().cursor_sentinel(),
        }
    }

    /// Rebuilds session state, falling back to defaults when the persisted
    /// log violates the history invariants.
    pub fn restore(self) -> AppState {
        match RevisionLog::from_parts(self.revisions, self.cursor) {
            Some(log) => AppState::with_parts(self.draft_text, log),
            None => AppState::new(),
        }
    }

    fn safe_default() -> Self {
        Self {
            draft_text: String::new(),
            revisions: Vec::new(),
            cursor: -1,
        }
    }
}

/// Reads and writes the fixed-name state file inside a state directory.
#[derive(Debug, Clone)]
pub struct StateFile {
    dir: PathBuf,
    durability: WriteDurability,
}

impl StateFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            durability: WriteDurability::Fast,
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILENAME)
    }

    /// Writes the state atomically (temp file + rename).
    pub fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.state_path();
        let json = serde_json::to_string_pretty(state).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| StoreError::Io { path, source }
        };

        {
            let mut file = fs::File::create(&tmp_path).map_err(io_err(&tmp_path))?;
            file.write_all(json.as_bytes()).map_err(io_err(&tmp_path))?;
            if self.durability == WriteDurability::Durable {
                file.sync_all().map_err(io_err(&tmp_path))?;
            }
        }
        fs::rename(&tmp_path, &path).map_err(io_err(&path))?;

        if self.durability == WriteDurability::Durable {
            // Directory sync is best-effort; not every platform supports it.
            if let Ok(dir) = fs::File::open(&self.dir) {
                let _ = dir.sync_all();
            }
        }
        Ok(())
    }

    /// Strict load: `Err` on missing file, unreadable file or invalid JSON.
    pub fn load(&self) -> Result<PersistedState, StoreError> {
        let path = self.state_path();
        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Json { path, source })
    }

    /// Lenient load: the safe default (`"" / [] / -1`) when the file is
    /// missing, unreadable or structurally invalid. This is the contract the
    /// controller relies on at startup; storage trouble never blocks the
    /// in-memory state.
    pub fn load_or_default(&self) -> PersistedState {
        match self.load() {
            Ok(state) => state,
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                PersistedState::safe_default()
            }
            Err(err) => {
                eprintln!("inflect: ignoring unreadable state file: {err}");
                PersistedState::safe_default()
            }
        }
    }

    /// Best-effort removal of the state file.
    pub fn clear(&self) -> Result<(), StoreError> {
        let path = self.state_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}
