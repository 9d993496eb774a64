// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only projections over the domain state.
//!
//! Truck capacity and status are derived here rather than stored: the filled
//! capacity of a truck is the sum of its capacity-holding bookings' weights,
//! recomputed on every read. Delivering or revoking a booking releases its
//! weight simply by leaving the active set, which keeps concurrent partial
//! (group-shipping) bookings correct.

use crate::state::State;
use load_link_domain::{Booking, BookingStatus, ChatMessage, Truck, TruckStatus};

/// Returns the filled capacity of a truck, in tons.
///
/// The sum runs over the truck's bookings whose status currently holds
/// capacity (`Accepted`, `Pickup`, `InTransit`).
#[must_use]
pub fn truck_capacity_filled(state: &State, truck_id: &str) -> u32 {
    state
        .bookings
        .iter()
        .filter(|b| b.truck_id == truck_id && b.status.holds_capacity())
        .map(|b| b.weight)
        .sum()
}

/// Returns the remaining capacity of a truck, in tons.
#[must_use]
pub fn truck_capacity_remaining(state: &State, truck: &Truck) -> u32 {
    truck
        .capacity_total
        .saturating_sub(truck_capacity_filled(state, &truck.id))
}

/// Derives the availability status of a truck from its bookings.
///
/// A truck with any in-transit booking is `InTransit`; otherwise the status
/// follows the filled-capacity sum: `Active` (empty), `Partial`, or `Full`.
#[must_use]
pub fn truck_status(state: &State, truck: &Truck) -> TruckStatus {
    let in_transit = state
        .bookings
        .iter()
        .any(|b| b.truck_id == truck.id && b.status == BookingStatus::InTransit);
    if in_transit {
        return TruckStatus::InTransit;
    }

    let filled: u32 = truck_capacity_filled(state, &truck.id);
    if filled == 0 {
        TruckStatus::Active
    } else if filled >= truck.capacity_total {
        TruckStatus::Full
    } else {
        TruckStatus::Partial
    }
}

/// Returns the bookings a user participates in, on either side of the match.
#[must_use]
pub fn bookings_for_participant<'a>(state: &'a State, user_id: &str) -> Vec<&'a Booking> {
    state
        .bookings
        .iter()
        .filter(|b| b.factory_owner_id == user_id || b.trucker_id == user_id)
        .collect()
}

/// Returns the bookings whose status is in the given set.
#[must_use]
pub fn bookings_with_status<'a>(state: &'a State, statuses: &[BookingStatus]) -> Vec<&'a Booking> {
    state
        .bookings
        .iter()
        .filter(|b| statuses.contains(&b.status))
        .collect()
}

/// Returns a trucker's committed revenue: the sum of `price` across their
/// non-revoked bookings.
///
/// Delivered and in-flight bookings both count. For a figure restricted to
/// completed trips, use [`realized_earnings`].
#[must_use]
pub fn committed_earnings(state: &State, trucker_id: &str) -> u64 {
    state
        .bookings
        .iter()
        .filter(|b| b.trucker_id == trucker_id && b.status != BookingStatus::Revoked)
        .map(|b| b.price)
        .sum()
}

/// Returns a trucker's realized revenue: the sum of `price` across their
/// delivered bookings only.
#[must_use]
pub fn realized_earnings(state: &State, trucker_id: &str) -> u64 {
    state
        .bookings
        .iter()
        .filter(|b| b.trucker_id == trucker_id && b.status == BookingStatus::Delivered)
        .map(|b| b.price)
        .sum()
}

/// Returns the chat log for a booking, in chronological (append) order.
#[must_use]
pub fn messages_for_booking<'a>(state: &'a State, booking_id: &str) -> Vec<&'a ChatMessage> {
    state
        .messages
        .iter()
        .filter(|m| m.booking_id == booking_id)
        .collect()
}
