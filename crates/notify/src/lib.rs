// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification types and the per-session notification feed.
//!
//! Notifications are created only by the lifecycle engine as a side effect
//! of booking transitions. The feed is session-only state: it is not part
//! of the persisted collection snapshots.

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

use serde::{Deserialize, Serialize};

/// The kind of event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A factory owner requested a booking against a truck.
    BookingRequest,
    /// A trucker accepted a booking; the message carries the OTP.
    BookingAccepted,
    /// Trip progress (departure, delivery).
    TripUpdate,
    /// Driver-initiated emergency signal.
    #[serde(rename = "SOS")]
    Sos,
}

impl NotificationKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookingRequest => "BookingRequest",
            Self::BookingAccepted => "BookingAccepted",
            Self::TripUpdate => "TripUpdate",
            Self::Sos => "SOS",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed, addressed, timestamped notice.
///
/// A notification is addressed to exactly one user and is immutable once
/// created, except for the read flag flipped by the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Opaque identifier for this notification.
    pub id: String,
    /// The addressee (user reference by id).
    pub user_id: String,
    /// What kind of event this reports.
    pub kind: NotificationKind,
    /// Human-readable message body.
    pub message: String,
    /// Whether the addressee has read this notice.
    pub read: bool,
    /// Creation timestamp (RFC 3339).
    pub timestamp: String,
}

impl Notification {
    /// Creates a new unread notification.
    ///
    /// # Arguments
    ///
    /// * `id` - Opaque identifier
    /// * `user_id` - The addressee
    /// * `kind` - The kind of event
    /// * `message` - Human-readable message body
    /// * `timestamp` - Creation timestamp (RFC 3339)
    #[must_use]
    pub const fn new(
        id: String,
        user_id: String,
        kind: NotificationKind,
        message: String,
        timestamp: String,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            message,
            read: false,
            timestamp,
        }
    }
}

/// The session's notification list, most recent first.
///
/// Most-recent-first ordering is the access contract observed by readers;
/// `push` therefore inserts at the head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    /// Creates an empty feed.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts a notification at the head of the feed.
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
    }

    /// Marks one notification as read.
    ///
    /// Idempotent: marking an already-read notification again changes
    /// nothing. An unknown id is a no-op, not an error.
    ///
    /// Returns true if a notification with the given id exists.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Returns the notifications addressed to one user, most recent first.
    #[must_use]
    pub fn for_user(&self, user_id: &str) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.user_id == user_id).collect()
    }

    /// Returns the number of unread notifications addressed to one user.
    #[must_use]
    pub fn unread_count(&self, user_id: &str) -> usize {
        self.items
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    /// Returns all notifications, most recent first.
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    /// Returns the number of notifications in the feed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the feed is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
