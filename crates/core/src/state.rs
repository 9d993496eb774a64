// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use load_link_domain::{Booking, ChatMessage, LoadRequest, Truck, User};
use load_link_notify::Notification;

/// The complete domain state owned by the store.
///
/// All entities are referenced by opaque string identifiers; there are no
/// embedded object references. Collections are replaced wholesale on each
/// mutation (copy-on-write), so id-based lookup is the only safe way to
/// follow a reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// The user roster available for login and addressing.
    pub users: Vec<User>,
    /// All trucks offered on the marketplace.
    pub trucks: Vec<Truck>,
    /// All load requests, most recent first.
    pub loads: Vec<LoadRequest>,
    /// All bookings, most recent first.
    pub bookings: Vec<Booking>,
    /// All chat messages, in append (chronological) order.
    pub messages: Vec<ChatMessage>,
}

impl State {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            trucks: Vec::new(),
            loads: Vec::new(),
            bookings: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Looks up a truck by id.
    #[must_use]
    pub fn truck(&self, id: &str) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// Looks up a load request by id.
    #[must_use]
    pub fn load(&self, id: &str) -> Option<&LoadRequest> {
        self.loads.iter().find(|l| l.id == id)
    }

    /// Looks up a booking by id.
    #[must_use]
    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely, yielding the new
/// state and the notifications to emit, or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// Notifications emitted as a side effect of the transition.
    pub notifications: Vec<Notification>,
    /// The id of the entity created by this transition, if any.
    pub created_id: Option<String>,
}
