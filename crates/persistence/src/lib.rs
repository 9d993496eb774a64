// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the LoadLink freight marketplace.
//!
//! This crate stores full-collection snapshots as JSON files in a single
//! directory, one file per collection key. It is the durable analog of the
//! session-storage layout the store was designed around: every write replaces
//! the whole collection, and a missing file simply means the collection has
//! never been persisted.
//!
//! The [`JsonSnapshotStore`] implements the core crate's `SnapshotSink`
//! contract, so a `Session` built with it snapshots its collections after
//! every mutation. On startup, [`JsonSnapshotStore::load_state`] overlays the
//! persisted collections onto a seed state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::fs;
use std::path::{Path, PathBuf};

use load_link::{SnapshotError, SnapshotSink, State};
use load_link_domain::{Booking, ChatMessage, LoadRequest, Truck, User};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Snapshot file keys, one per persisted collection.
pub const KEY_CURRENT_USER: &str = "current_user";
pub const KEY_TRUCKS: &str = "trucks";
pub const KEY_LOADS: &str = "loads";
pub const KEY_BOOKINGS: &str = "bookings";
pub const KEY_MESSAGES: &str = "messages";

/// A directory-backed JSON snapshot store.
///
/// Each collection lives in `<dir>/<key>.json`. Writes go through a sibling
/// temporary file and a rename, so a crash mid-write never leaves a truncated
/// snapshot behind.
#[derive(Debug)]
pub struct JsonSnapshotStore {
    dir: PathBuf,
}

impl JsonSnapshotStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            PersistenceError::InitializationError(format!(
                "cannot create snapshot directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Replaces the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    pub fn write_snapshot<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(value)?;
        let path = self.snapshot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, bytes = json.len(), "snapshot written");
        Ok(())
    }

    /// Reads the snapshot stored under `key`.
    ///
    /// Returns `None` if the collection has never been persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn read_snapshot<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, PersistenceError> {
        let path = self.snapshot_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Loads the persisted login identity, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn load_current_user(&self) -> Result<Option<User>, PersistenceError> {
        // The stored value is itself an Option: logout persists `null`
        Ok(self
            .read_snapshot::<Option<User>>(KEY_CURRENT_USER)?
            .flatten())
    }

    /// Loads the persisted truck list, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn load_trucks(&self) -> Result<Option<Vec<Truck>>, PersistenceError> {
        self.read_snapshot(KEY_TRUCKS)
    }

    /// Loads the persisted load-request list, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn load_loads(&self) -> Result<Option<Vec<LoadRequest>>, PersistenceError> {
        self.read_snapshot(KEY_LOADS)
    }

    /// Loads the persisted booking list, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn load_bookings(&self) -> Result<Option<Vec<Booking>>, PersistenceError> {
        self.read_snapshot(KEY_BOOKINGS)
    }

    /// Loads the persisted message list, if one was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn load_messages(&self) -> Result<Option<Vec<ChatMessage>>, PersistenceError> {
        self.read_snapshot(KEY_MESSAGES)
    }

    /// Overlays every persisted collection onto `seed`.
    ///
    /// Collections without a snapshot keep the seed's contents; the user
    /// roster always comes from the seed.
    ///
    /// # Errors
    ///
    /// Returns an error if any snapshot cannot be read.
    pub fn load_state(&self, seed: State) -> Result<State, PersistenceError> {
        let mut state = seed;
        if let Some(trucks) = self.load_trucks()? {
            state.trucks = trucks;
        }
        if let Some(loads) = self.load_loads()? {
            state.loads = loads;
        }
        if let Some(bookings) = self.load_bookings()? {
            state.bookings = bookings;
        }
        if let Some(messages) = self.load_messages()? {
            state.messages = messages;
        }
        Ok(state)
    }
}

fn sink_error(key: &str, err: &PersistenceError) -> SnapshotError {
    SnapshotError {
        key: key.to_string(),
        reason: err.to_string(),
    }
}

impl SnapshotSink for JsonSnapshotStore {
    fn save_current_user(&mut self, user: Option<&User>) -> Result<(), SnapshotError> {
        self.write_snapshot(KEY_CURRENT_USER, &user)
            .map_err(|e| sink_error(KEY_CURRENT_USER, &e))
    }

    fn save_trucks(&mut self, trucks: &[Truck]) -> Result<(), SnapshotError> {
        self.write_snapshot(KEY_TRUCKS, &trucks)
            .map_err(|e| sink_error(KEY_TRUCKS, &e))
    }

    fn save_loads(&mut self, loads: &[LoadRequest]) -> Result<(), SnapshotError> {
        self.write_snapshot(KEY_LOADS, &loads)
            .map_err(|e| sink_error(KEY_LOADS, &e))
    }

    fn save_bookings(&mut self, bookings: &[Booking]) -> Result<(), SnapshotError> {
        self.write_snapshot(KEY_BOOKINGS, &bookings)
            .map_err(|e| sink_error(KEY_BOOKINGS, &e))
    }

    fn save_messages(&mut self, messages: &[ChatMessage]) -> Result<(), SnapshotError> {
        self.write_snapshot(KEY_MESSAGES, &messages)
            .map_err(|e| sink_error(KEY_MESSAGES, &e))
    }
}
