// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle states and transition rules.
//!
//! A booking progresses strictly forward along one path, with a single
//! branch for declining a pending request. Status transitions are
//! caller-initiated only; the system never advances status based on time.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// ```text
/// Pending -> Accepted -> Pickup -> InTransit -> Delivered
/// Pending -> Revoked
/// ```
///
/// `Delivered` and `Revoked` are terminal. No other edges exist and no
/// backward transitions are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Requested by a factory owner; nothing reserved yet.
    Pending,
    /// Accepted by the trucker; capacity committed, OTP issued.
    Accepted,
    /// Goods being collected at the origin.
    Pickup,
    /// Trip underway.
    InTransit,
    /// Goods delivered. Terminal.
    Delivered,
    /// Declined while pending. Terminal.
    Revoked,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and notification text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Pickup => "Pickup",
            Self::InTransit => "InTransit",
            Self::Delivered => "Delivered",
            Self::Revoked => "Revoked",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Pickup" => Ok(Self::Pickup),
            "InTransit" => Ok(Self::InTransit),
            "Delivered" => Ok(Self::Delivered),
            "Revoked" => Ok(Self::Revoked),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another
    /// state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Revoked)
    }

    /// Returns true if capacity on the truck is committed to this booking.
    ///
    /// Pending bookings reserve nothing; terminal bookings have released
    /// whatever they held.
    #[must_use]
    pub const fn holds_capacity(&self) -> bool {
        matches!(self, Self::Accepted | Self::Pickup | Self::InTransit)
    }

    /// Returns true if the driver may raise an SOS in this status.
    ///
    /// An emergency signal only makes sense once a trip has been committed
    /// and before it reaches a terminal state.
    #[must_use]
    pub const fn allows_sos(&self) -> bool {
        matches!(self, Self::Accepted | Self::Pickup | Self::InTransit)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the requested edge
    /// does not exist in the lifecycle diagram.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Pending => matches!(new_status, Self::Accepted | Self::Revoked),
            Self::Accepted => matches!(new_status, Self::Pickup),
            Self::Pickup => matches!(new_status, Self::InTransit),
            Self::InTransit => matches!(new_status, Self::Delivered),
            Self::Delivered | Self::Revoked => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The central transactional entity: a match between one load request and
/// one truck's capacity.
///
/// `weight` and `price` are snapshots taken at creation time. Later changes
/// to the truck's asking price never retroactively change an existing
/// booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Opaque identifier for this booking.
    pub id: String,
    /// The truck carrying the load.
    pub truck_id: String,
    /// The load request being shipped.
    pub load_request_id: String,
    /// The factory owner side of the match.
    pub factory_owner_id: String,
    /// The trucker side of the match.
    pub trucker_id: String,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Weight in tons, frozen from the load at creation.
    pub weight: u32,
    /// Total price, `price_per_ton * weight`, frozen at creation.
    pub price: u64,
    /// One-time pickup code, issued on acceptance.
    pub otp: Option<String>,
    /// When the trucker accepted (RFC 3339).
    pub accepted_at: Option<String>,
    /// When the goods were delivered (RFC 3339).
    pub delivered_at: Option<String>,
    /// Whether the driver has raised an emergency signal.
    #[serde(default)]
    pub sos_active: bool,
}
