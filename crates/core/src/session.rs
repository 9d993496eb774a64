// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The application session context.
//!
//! A `Session` replaces the ambient globals of a browser store: it owns the
//! domain state, the logged-in identity, the notification feed, and the id
//! generator, and it drives the persistence hook after each mutation. All
//! operations are synchronous; there is exactly one writer per session.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::snapshot::SnapshotSink;
use crate::state::{State, TransitionResult};
use load_link_domain::{BookingStatus, IdGenerator, User};
use load_link_notify::{Notification, NotificationFeed};
use time::OffsetDateTime;

/// User-supplied fields of a new load request.
///
/// Owner identity and company name are filled in from the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoadRequest {
    /// Description of the goods.
    pub goods_type: String,
    /// Shipment weight in tons.
    pub weight: u32,
    /// Route origin.
    pub origin: String,
    /// Route destination.
    pub destination: String,
    /// The price the owner is aiming for.
    pub target_price: u32,
}

/// A single-writer session over the domain state.
pub struct Session {
    state: State,
    feed: NotificationFeed,
    ids: IdGenerator,
    current_user: Option<User>,
    sink: Option<Box<dyn SnapshotSink>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("feed", &self.feed)
            .field("current_user", &self.current_user)
            .field("sink", &self.sink.as_ref().map(|_| "SnapshotSink"))
            .finish()
    }
}

impl Session {
    /// Creates a session over an initial state with no persistence hook.
    #[must_use]
    pub const fn new(state: State) -> Self {
        Self {
            state,
            feed: NotificationFeed::new(),
            ids: IdGenerator::new(),
            current_user: None,
            sink: None,
        }
    }

    /// Creates a session that snapshots changed collections to `sink`.
    #[must_use]
    pub fn with_sink(state: State, sink: Box<dyn SnapshotSink>) -> Self {
        Self {
            state,
            feed: NotificationFeed::new(),
            ids: IdGenerator::new(),
            current_user: None,
            sink: Some(sink),
        }
    }

    /// Restores a previously persisted login without re-persisting it.
    ///
    /// Used once at startup when the loaded snapshot carries an identity.
    pub fn restore_current_user(&mut self, user: Option<User>) {
        self.current_user = user;
    }

    /// Returns the current domain state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the session's notification feed.
    #[must_use]
    pub const fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    /// Returns the logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Logs in as a user from the roster.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UserNotFound` if the id is not in the roster.
    pub fn login(&mut self, user_id: &str) -> Result<(), CoreError> {
        let user: User = self
            .state
            .user(user_id)
            .cloned()
            .ok_or_else(|| load_link_domain::DomainError::UserNotFound(user_id.to_string()))?;

        tracing::info!(user_id = %user.id, role = %user.role, "user logged in");
        self.current_user = Some(user);
        self.persist_current_user();
        Ok(())
    }

    /// Clears the logged-in identity.
    pub fn logout(&mut self) {
        self.current_user = None;
        self.persist_current_user();
    }

    /// Posts a new load request for the logged-in user.
    ///
    /// Returns the new load's id.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` if no user is logged in, or a domain
    /// violation for malformed input.
    pub fn create_load_request(&mut self, input: NewLoadRequest) -> Result<String, CoreError> {
        let user = self.require_login("create load request")?;
        let company_name: String = user
            .company_name
            .clone()
            .unwrap_or_else(|| user.name.clone());

        let command = Command::CreateLoadRequest {
            owner_id: user.id.clone(),
            company_name,
            goods_type: input.goods_type,
            weight: input.weight,
            origin: input.origin,
            destination: input.destination,
            target_price: input.target_price,
        };
        let id: String = self.run_created(command, "create load request")?;
        tracing::info!(load_id = %id, "load request created");

        self.persist_loads();
        Ok(id)
    }

    /// Requests a booking of a truck against a load.
    ///
    /// Returns the new booking's id.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` if no user is logged in, `NotFound` for a
    /// missing truck or load, or `LoadAlreadyBooked` if the load already has
    /// a non-revoked booking.
    pub fn create_booking(&mut self, truck_id: &str, load_id: &str) -> Result<String, CoreError> {
        self.require_login("create booking")?;

        let command = Command::CreateBooking {
            truck_id: truck_id.to_string(),
            load_id: load_id.to_string(),
        };
        let id: String = self.run_created(command, "create booking")?;
        tracing::info!(booking_id = %id, truck_id, load_id, "booking requested");

        self.persist_bookings();
        self.persist_loads();
        Ok(id)
    }

    /// Advances (or declines) a booking along its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` if no user is logged in,
    /// `BookingNotFound` for a missing booking, `InvalidStatusTransition`
    /// for an illegal edge, or `CapacityExceeded` when acceptance does not
    /// fit the truck.
    pub fn update_booking_status(
        &mut self,
        booking_id: &str,
        new_status: BookingStatus,
    ) -> Result<(), CoreError> {
        self.require_login("update booking status")?;

        let command = Command::UpdateBookingStatus {
            booking_id: booking_id.to_string(),
            new_status,
        };
        self.run(command)?;
        tracing::info!(booking_id, status = %new_status, "booking status updated");

        self.persist_bookings();
        // Revocation and delivery both move the load's status with them
        self.persist_loads();
        Ok(())
    }

    /// Raises the driver's emergency signal on a booking.
    ///
    /// Idempotent: re-triggering an active SOS changes nothing and emits no
    /// further notification.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` if no user is logged in,
    /// `BookingNotFound` for a missing booking, or `SosUnavailable` outside
    /// a committed, non-terminal trip.
    pub fn trigger_sos(&mut self, booking_id: &str) -> Result<(), CoreError> {
        self.require_login("trigger SOS")?;

        let command = Command::TriggerSos {
            booking_id: booking_id.to_string(),
        };
        self.run(command)?;
        tracing::warn!(booking_id, "SOS triggered");

        self.persist_bookings();
        Ok(())
    }

    /// Appends a chat message to a booking's log, authored by the logged-in
    /// user.
    ///
    /// Returns the new message's id.
    ///
    /// # Errors
    ///
    /// Returns `Unauthenticated` if no user is logged in, `BookingNotFound`
    /// for a missing booking, or `EmptyMessage` for blank text.
    pub fn send_message(&mut self, booking_id: &str, text: &str) -> Result<String, CoreError> {
        let user = self.require_login("send message")?;

        let command = Command::SendMessage {
            booking_id: booking_id.to_string(),
            sender_id: user.id.clone(),
            text: text.to_string(),
        };
        let id: String = self.run_created(command, "send message")?;

        self.persist_messages();
        Ok(id)
    }

    /// Marks one notification as read.
    ///
    /// Idempotent; an unknown id is a no-op.
    pub fn mark_notification_read(&mut self, id: &str) {
        self.feed.mark_read(id);
    }

    /// Returns the logged-in user's notifications, most recent first.
    #[must_use]
    pub fn notifications(&self) -> Vec<&Notification> {
        self.current_user
            .as_ref()
            .map(|u| self.feed.for_user(&u.id))
            .unwrap_or_default()
    }

    /// Returns the logged-in user's unread notification count.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.current_user
            .as_ref()
            .map_or(0, |u| self.feed.unread_count(&u.id))
    }

    fn require_login(&self, action: &str) -> Result<&User, CoreError> {
        self.current_user
            .as_ref()
            .ok_or_else(|| CoreError::Unauthenticated {
                action: action.to_string(),
            })
    }

    /// Applies a command and commits the result into the session.
    fn run(&mut self, command: Command) -> Result<Option<String>, CoreError> {
        let result: TransitionResult = apply(
            &self.state,
            command,
            &mut self.ids,
            OffsetDateTime::now_utc(),
        )?;

        self.state = result.new_state;
        for notification in result.notifications {
            self.feed.push(notification);
        }
        Ok(result.created_id)
    }

    /// Like [`Self::run`], for commands that must create an entity.
    fn run_created(&mut self, command: Command, action: &str) -> Result<String, CoreError> {
        self.run(command)?
            .ok_or_else(|| CoreError::Internal(format!("{action} produced no entity id")))
    }

    fn persist_current_user(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.save_current_user(self.current_user.as_ref()) {
                tracing::warn!(error = %e, "failed to persist current user snapshot");
            }
        }
    }

    fn persist_loads(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.save_loads(&self.state.loads) {
                tracing::warn!(error = %e, "failed to persist loads snapshot");
            }
        }
    }

    fn persist_bookings(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.save_bookings(&self.state.bookings) {
                tracing::warn!(error = %e, "failed to persist bookings snapshot");
            }
        }
    }

    fn persist_messages(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.save_messages(&self.state.messages) {
                tracing::warn!(error = %e, "failed to persist messages snapshot");
            }
        }
    }
}
