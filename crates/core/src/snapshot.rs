// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use load_link_domain::{Booking, ChatMessage, LoadRequest, Truck, User};

/// Error from a snapshot write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotError {
    /// The collection key whose snapshot failed.
    pub key: String,
    /// What went wrong.
    pub reason: String,
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Snapshot write failed for '{}': {}", self.key, self.reason)
    }
}

impl std::error::Error for SnapshotError {}

/// The external persistence contract.
///
/// Each method writes a full snapshot of one collection, keyed like the
/// session storage layout. Writes are fire-and-forget from the session's
/// point of view: a failed write is logged, never rolled into the outcome
/// of the operation that triggered it. Notifications are session-only and
/// have no snapshot.
pub trait SnapshotSink {
    /// Persists the current user identity (or its absence).
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_current_user(&mut self, user: Option<&User>) -> Result<(), SnapshotError>;

    /// Persists the truck list.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_trucks(&mut self, trucks: &[Truck]) -> Result<(), SnapshotError>;

    /// Persists the load-request list.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_loads(&mut self, loads: &[LoadRequest]) -> Result<(), SnapshotError>;

    /// Persists the booking list.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_bookings(&mut self, bookings: &[Booking]) -> Result<(), SnapshotError>;

    /// Persists the message list.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_messages(&mut self, messages: &[ChatMessage]) -> Result<(), SnapshotError>;
}
