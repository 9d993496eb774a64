// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The role attached to a logged-in identity.
///
/// The role is a tag only; there is no authorization layer behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A factory owner posting load requests.
    FactoryOwner,
    /// A trucker offering capacity on a truck.
    Trucker,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FactoryOwner => "FactoryOwner",
            Self::Trucker => "Trucker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A marketplace identity.
///
/// Users are immutable once created and are selected at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier for this user.
    pub id: String,
    /// The user's role.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional company name.
    pub company_name: Option<String>,
}

/// Derived availability status of a truck.
///
/// Status is never stored; it is computed from the truck's non-terminal
/// bookings at read time. `Completed` is declared for API parity with the
/// persisted status vocabulary but is never derived by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TruckStatus {
    /// No capacity committed.
    Active,
    /// Some, but not all, capacity committed.
    Partial,
    /// All capacity committed.
    Full,
    /// A booking on this truck is currently in transit.
    InTransit,
    /// Trip finished (vocabulary parity only; never derived).
    Completed,
}

impl TruckStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Partial => "Partial",
            Self::Full => "Full",
            Self::InTransit => "InTransit",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A truck offered on the marketplace, owned by one trucker.
///
/// Capacity accounting is intentionally absent from this type: how much of
/// `capacity_total` is filled is a projection over the truck's currently
/// active bookings, so there is no stored counter to drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Opaque identifier for this truck.
    pub id: String,
    /// The trucker who drives this truck (user reference by id).
    pub driver_id: String,
    /// Driver display name.
    pub driver_name: String,
    /// Vehicle model text.
    pub vehicle_model: String,
    /// Route origin.
    pub origin: String,
    /// Route destination.
    pub destination: String,
    /// Departure date (ISO 8601 date string).
    pub departure_date: String,
    /// Total capacity in tons.
    pub capacity_total: u32,
    /// Asking price per ton.
    pub price_per_ton: u32,
    /// Whether the trucker accepts multiple concurrent partial loads.
    pub group_shipping_allowed: bool,
    /// Marketplace rating.
    pub rating: f32,
}

/// Lifecycle status of a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Posted and available for booking.
    Pending,
    /// A non-revoked booking exists against this load.
    Booked,
    /// The load has been delivered.
    Completed,
}

impl LoadStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Booked => "Booked",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A factory owner's request to ship a quantity of goods between two
/// locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Opaque identifier for this load request.
    pub id: String,
    /// The factory owner who posted this load (user reference by id).
    pub owner_id: String,
    /// Company name shown alongside the request.
    pub company_name: String,
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
    /// Current lifecycle status.
    pub status: LoadStatus,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// A free-text chat message attached to a booking.
///
/// Messages are append-only; insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Opaque identifier for this message.
    pub id: String,
    /// The booking this message belongs to.
    pub booking_id: String,
    /// The author (user reference by id).
    pub sender_id: String,
    /// Message body.
    pub text: String,
    /// Creation timestamp (RFC 3339).
    pub timestamp: String,
}
