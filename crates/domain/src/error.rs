// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Goods description is empty or invalid.
    InvalidGoodsType(String),
    /// Shipment weight is not a positive number of tons.
    InvalidWeight(String),
    /// Route origin or destination is empty, or both name the same place.
    InvalidRoute(String),
    /// Chat message text is empty or whitespace-only.
    EmptyMessage,
    /// Booking status string is not part of the lifecycle vocabulary.
    InvalidBookingStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// The requested booking status is not a legal successor of the current
    /// status.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is rejected.
        reason: String,
    },
    /// Accepting the booking would push the truck past its total capacity.
    CapacityExceeded {
        /// The truck whose capacity would be exceeded.
        truck_id: String,
        /// The booking weight in tons.
        requested: u32,
        /// The remaining capacity in tons.
        available: u32,
    },
    /// The load request already has a non-revoked booking.
    LoadAlreadyBooked {
        /// The load request id.
        load_id: String,
    },
    /// An SOS was raised outside a committed, non-terminal trip.
    SosUnavailable {
        /// The booking's current status.
        status: String,
    },
    /// Truck not found.
    TruckNotFound(String),
    /// Load request not found.
    LoadNotFound(String),
    /// Booking not found.
    BookingNotFound(String),
    /// User not found.
    UserNotFound(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGoodsType(msg) => write!(f, "Invalid goods type: {msg}"),
            Self::InvalidWeight(msg) => write!(f, "Invalid weight: {msg}"),
            Self::InvalidRoute(msg) => write!(f, "Invalid route: {msg}"),
            Self::EmptyMessage => write!(f, "Message text cannot be empty"),
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: '{status}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition from {from} to {to}: {reason}")
            }
            Self::CapacityExceeded {
                truck_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Truck '{truck_id}' cannot take {requested}T: only {available}T available"
                )
            }
            Self::LoadAlreadyBooked { load_id } => {
                write!(f, "Load request '{load_id}' already has an active booking")
            }
            Self::SosUnavailable { status } => {
                write!(f, "SOS cannot be raised on a booking in status {status}")
            }
            Self::TruckNotFound(id) => write!(f, "Truck '{id}' not found"),
            Self::LoadNotFound(id) => write!(f, "Load request '{id}' not found"),
            Self::BookingNotFound(id) => write!(f, "Booking '{id}' not found"),
            Self::UserNotFound(id) => write!(f, "User '{id}' not found"),
        }
    }
}

impl std::error::Error for DomainError {}
