// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::queries::truck_capacity_filled;
use crate::state::{State, TransitionResult};
use load_link_domain::{
    Booking, BookingStatus, ChatMessage, DomainError, IdGenerator, IdPrefix, LoadRequest,
    LoadStatus, generate_otp, validate_load_fields, validate_message_text,
};
use load_link_notify::{Notification, NotificationKind};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Converts an instant to Unix milliseconds for id generation.
///
/// Instants before the epoch clamp to zero; the id generator's monotonic
/// guard covers that case.
fn unix_millis(now: OffsetDateTime) -> u64 {
    u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}

/// Builds a notification addressed to one user.
fn emit(
    ids: &mut IdGenerator,
    now_millis: u64,
    timestamp: &str,
    user_id: &str,
    kind: NotificationKind,
    message: String,
) -> Notification {
    Notification::new(
        ids.next(IdPrefix::Notification, now_millis),
        user_id.to_string(),
        kind,
        message,
        timestamp.to_string(),
    )
}

/// Applies a command to the current state, producing a new state, the
/// notifications to emit, and the id of any created entity.
///
/// The input state is never mutated: on success the caller swaps in
/// `TransitionResult::new_state`; on failure the old state stands untouched.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `ids` - The id generator for entities created by this transition
/// * `now` - The current wall clock
///
/// # Errors
///
/// Returns an error if:
/// - The command references a truck, load, or booking that does not exist
/// - The command violates a domain rule (validation, lifecycle, capacity)
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &State,
    command: Command,
    ids: &mut IdGenerator,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let timestamp: String = now
        .format(&Rfc3339)
        .map_err(|e| CoreError::Internal(format!("failed to format timestamp: {e}")))?;
    let now_millis: u64 = unix_millis(now);

    match command {
        Command::CreateLoadRequest {
            owner_id,
            company_name,
            goods_type,
            weight,
            origin,
            destination,
            target_price,
        } => {
            validate_load_fields(&goods_type, weight, &origin, &destination)?;

            let load: LoadRequest = LoadRequest {
                id: ids.next(IdPrefix::Load, now_millis),
                owner_id,
                company_name,
                goods_type,
                weight,
                origin: origin.trim().to_string(),
                destination: destination.trim().to_string(),
                target_price,
                status: LoadStatus::Pending,
                created_at: timestamp,
            };
            let load_id: String = load.id.clone();

            // New loads go to the head so browse views read newest first
            let mut new_state: State = state.clone();
            new_state.loads.insert(0, load);

            Ok(TransitionResult {
                new_state,
                notifications: Vec::new(),
                created_id: Some(load_id),
            })
        }
        Command::CreateBooking { truck_id, load_id } => {
            let truck = state
                .truck(&truck_id)
                .ok_or_else(|| DomainError::TruckNotFound(truck_id.clone()))?;
            let load = state
                .load(&load_id)
                .ok_or_else(|| DomainError::LoadNotFound(load_id.clone()))?;

            // Invariant: a load holds at most one non-revoked booking
            let already_booked = load.status != LoadStatus::Pending
                || state
                    .bookings
                    .iter()
                    .any(|b| b.load_request_id == load_id && b.status != BookingStatus::Revoked);
            if already_booked {
                return Err(DomainError::LoadAlreadyBooked {
                    load_id: load_id.clone(),
                }
                .into());
            }

            // Weight and price are frozen here; later truck price changes
            // never touch an existing booking. No capacity check at creation:
            // a request reserves nothing until the trucker accepts.
            let booking: Booking = Booking {
                id: ids.next(IdPrefix::Booking, now_millis),
                truck_id: truck_id.clone(),
                load_request_id: load_id.clone(),
                factory_owner_id: load.owner_id.clone(),
                trucker_id: truck.driver_id.clone(),
                status: BookingStatus::Pending,
                weight: load.weight,
                price: u64::from(truck.price_per_ton) * u64::from(load.weight),
                otp: None,
                accepted_at: None,
                delivered_at: None,
                sos_active: false,
            };
            let booking_id: String = booking.id.clone();

            let notifications = vec![emit(
                ids,
                now_millis,
                &timestamp,
                &truck.driver_id,
                NotificationKind::BookingRequest,
                format!(
                    "New booking request for {}T of {}",
                    load.weight, load.goods_type
                ),
            )];

            let mut new_state: State = state.clone();
            new_state.bookings.insert(0, booking);
            if let Some(l) = new_state.loads.iter_mut().find(|l| l.id == load_id) {
                l.status = LoadStatus::Booked;
            }

            Ok(TransitionResult {
                new_state,
                notifications,
                created_id: Some(booking_id),
            })
        }
        Command::UpdateBookingStatus {
            booking_id,
            new_status,
        } => {
            let position = state
                .bookings
                .iter()
                .position(|b| b.id == booking_id)
                .ok_or_else(|| DomainError::BookingNotFound(booking_id.clone()))?;
            let booking = &state.bookings[position];

            booking.status.validate_transition(new_status)?;

            let mut new_state: State = state.clone();
            let mut notifications: Vec<Notification> = Vec::new();

            match new_status {
                BookingStatus::Accepted => {
                    let truck = state
                        .truck(&booking.truck_id)
                        .ok_or_else(|| DomainError::TruckNotFound(booking.truck_id.clone()))?;

                    // Acceptance is the commit point of the two-phase model:
                    // the booking's weight must fit what the truck's active
                    // bookings have left.
                    let filled: u32 = truck_capacity_filled(state, &truck.id);
                    let available: u32 = truck.capacity_total.saturating_sub(filled);
                    if booking.weight > available {
                        return Err(DomainError::CapacityExceeded {
                            truck_id: truck.id.clone(),
                            requested: booking.weight,
                            available,
                        }
                        .into());
                    }

                    let otp: String = generate_otp();
                    notifications.push(emit(
                        ids,
                        now_millis,
                        &timestamp,
                        &booking.factory_owner_id,
                        NotificationKind::BookingAccepted,
                        format!("Booking {booking_id} accepted! OTP: {otp}"),
                    ));

                    let b = &mut new_state.bookings[position];
                    b.status = BookingStatus::Accepted;
                    b.otp = Some(otp);
                    b.accepted_at = Some(timestamp.clone());
                }
                BookingStatus::Pickup => {
                    new_state.bookings[position].status = BookingStatus::Pickup;
                }
                BookingStatus::InTransit => {
                    notifications.push(emit(
                        ids,
                        now_millis,
                        &timestamp,
                        &booking.factory_owner_id,
                        NotificationKind::TripUpdate,
                        String::from("Your shipment is now in transit."),
                    ));
                    new_state.bookings[position].status = BookingStatus::InTransit;
                }
                BookingStatus::Delivered => {
                    notifications.push(emit(
                        ids,
                        now_millis,
                        &timestamp,
                        &booking.factory_owner_id,
                        NotificationKind::TripUpdate,
                        String::from("Shipment delivered successfully!"),
                    ));

                    let load_id: String = booking.load_request_id.clone();
                    let b = &mut new_state.bookings[position];
                    b.status = BookingStatus::Delivered;
                    b.delivered_at = Some(timestamp.clone());

                    // The delivered booking leaves the capacity-holding set,
                    // which releases exactly its own weight. The load's
                    // lifecycle completes with it.
                    if let Some(l) = new_state.loads.iter_mut().find(|l| l.id == load_id) {
                        l.status = LoadStatus::Completed;
                    }
                }
                BookingStatus::Revoked => {
                    let load_id: String = booking.load_request_id.clone();
                    new_state.bookings[position].status = BookingStatus::Revoked;

                    // Nothing was reserved for a pending booking, so there is
                    // no capacity to release; the load goes back on the
                    // market.
                    if let Some(l) = new_state.loads.iter_mut().find(|l| l.id == load_id) {
                        l.status = LoadStatus::Pending;
                    }
                }
                BookingStatus::Pending => {
                    // validate_transition admits no edge back to Pending
                }
            }

            Ok(TransitionResult {
                new_state,
                notifications,
                created_id: None,
            })
        }
        Command::TriggerSos { booking_id } => {
            let position = state
                .bookings
                .iter()
                .position(|b| b.id == booking_id)
                .ok_or_else(|| DomainError::BookingNotFound(booking_id.clone()))?;
            let booking = &state.bookings[position];

            if !booking.status.allows_sos() {
                return Err(DomainError::SosUnavailable {
                    status: booking.status.as_str().to_string(),
                }
                .into());
            }

            // Idempotent: a second trigger neither changes state nor emits
            // another notification.
            if booking.sos_active {
                return Ok(TransitionResult {
                    new_state: state.clone(),
                    notifications: Vec::new(),
                    created_id: None,
                });
            }

            let notifications = vec![emit(
                ids,
                now_millis,
                &timestamp,
                &booking.factory_owner_id,
                NotificationKind::Sos,
                format!("URGENT: SOS triggered by driver for Booking {booking_id}"),
            )];

            let mut new_state: State = state.clone();
            new_state.bookings[position].sos_active = true;

            Ok(TransitionResult {
                new_state,
                notifications,
                created_id: None,
            })
        }
        Command::SendMessage {
            booking_id,
            sender_id,
            text,
        } => {
            if state.booking(&booking_id).is_none() {
                return Err(DomainError::BookingNotFound(booking_id).into());
            }
            validate_message_text(&text)?;

            let message: ChatMessage = ChatMessage {
                id: ids.next(IdPrefix::Message, now_millis),
                booking_id,
                sender_id,
                text,
                timestamp,
            };
            let message_id: String = message.id.clone();

            // Append-only: insertion order is chronological order
            let mut new_state: State = state.clone();
            new_state.messages.push(message);

            Ok(TransitionResult {
                new_state,
                notifications: Vec::new(),
                created_id: Some(message_id),
            })
        }
    }
}
