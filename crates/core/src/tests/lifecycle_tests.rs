// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking status transitions and their side effects: OTP
//! issuance, capacity accounting, notification emission, and the SOS signal.

use crate::{Command, CoreError, apply, truck_capacity_filled, truck_status};
use load_link_domain::{BookingStatus, DomainError, IdGenerator, LoadStatus, TruckStatus};
use load_link_notify::NotificationKind;

use super::helpers::{
    OWNER, SEED_LOAD, TRUCK, advance, create_test_state, seed_load, state_with_booking, test_now,
    truck_with_capacity,
};
use crate::State;

fn assert_capacity_invariant(state: &State) {
    for truck in &state.trucks {
        let filled = truck_capacity_filled(state, &truck.id);
        assert!(
            filled <= truck.capacity_total,
            "truck {} filled {filled}T over total {}T",
            truck.id,
            truck.capacity_total
        );
    }
}

// ============================================================================
// Acceptance
// ============================================================================

#[test]
fn test_accept_issues_six_digit_otp_and_timestamps() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted);

    let booking = result.new_state.booking(&booking_id).unwrap();
    assert_eq!(booking.status, BookingStatus::Accepted);
    let otp = booking.otp.as_ref().unwrap();
    assert_eq!(otp.len(), 6);
    assert!(otp.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(booking.accepted_at.as_deref(), Some("2026-01-01T00:00:00Z"));
    assert_capacity_invariant(&result.new_state);
}

#[test]
fn test_accept_notifies_owner_with_otp() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted);

    assert_eq!(result.notifications.len(), 1);
    let notification = &result.notifications[0];
    assert_eq!(notification.user_id, OWNER);
    assert_eq!(notification.kind, NotificationKind::BookingAccepted);

    let otp = result
        .new_state
        .booking(&booking_id)
        .unwrap()
        .otp
        .clone()
        .unwrap();
    assert!(notification.message.contains(&otp));
}

#[test]
fn test_accept_commits_capacity_partial() {
    // 2T onto a 10T truck leaves it Partial
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted);

    let truck = result.new_state.truck(TRUCK).unwrap();
    assert_eq!(truck_capacity_filled(&result.new_state, TRUCK), 2);
    assert_eq!(truck_status(&result.new_state, truck), TruckStatus::Partial);
}

#[test]
fn test_accept_commits_capacity_full() {
    // 2T onto a 2T truck fills it
    let mut state = create_test_state();
    state.trucks = vec![truck_with_capacity(2)];
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted);

    let truck = result.new_state.truck(TRUCK).unwrap();
    assert_eq!(truck_capacity_filled(&result.new_state, TRUCK), 2);
    assert_eq!(truck_status(&result.new_state, truck), TruckStatus::Full);
}

#[test]
fn test_accept_rejects_overweight_booking() {
    // 2T load cannot be accepted onto a 1T truck
    let mut state = create_test_state();
    state.trucks = vec![truck_with_capacity(1)];
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = apply(
        &state,
        Command::UpdateBookingStatus {
            booking_id: booking_id.clone(),
            new_status: BookingStatus::Accepted,
        },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::CapacityExceeded {
            requested: 2,
            available: 1,
            ..
        })
    ));
    // The pending booking still reserves nothing
    assert_eq!(truck_capacity_filled(&state, TRUCK), 0);
}

// ============================================================================
// Pickup / Transit / Delivery
// ============================================================================

#[test]
fn test_pickup_is_a_bare_transition() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted).new_state;

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Pickup);

    assert_eq!(
        result.new_state.booking(&booking_id).unwrap().status,
        BookingStatus::Pickup
    );
    assert!(result.notifications.is_empty());
    assert_eq!(truck_capacity_filled(&result.new_state, TRUCK), 2);
}

#[test]
fn test_in_transit_marks_truck_and_notifies_owner() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Pickup).new_state;

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::InTransit);

    let truck = result.new_state.truck(TRUCK).unwrap();
    assert_eq!(
        truck_status(&result.new_state, truck),
        TruckStatus::InTransit
    );
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].user_id, OWNER);
    assert_eq!(result.notifications[0].kind, NotificationKind::TripUpdate);
}

#[test]
fn test_delivery_releases_capacity_and_completes_load() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Pickup).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::InTransit).new_state;

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Delivered);

    let booking = result.new_state.booking(&booking_id).unwrap();
    assert_eq!(booking.status, BookingStatus::Delivered);
    let delivered_at = booking.delivered_at.as_ref().unwrap();
    let accepted_at = booking.accepted_at.as_ref().unwrap();
    assert!(delivered_at >= accepted_at);

    let truck = result.new_state.truck(TRUCK).unwrap();
    assert_eq!(truck_capacity_filled(&result.new_state, TRUCK), 0);
    assert_eq!(truck_status(&result.new_state, truck), TruckStatus::Active);
    assert_eq!(
        result.new_state.load(SEED_LOAD).unwrap().status,
        LoadStatus::Completed
    );
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].user_id, OWNER);
    assert_capacity_invariant(&result.new_state);
}

#[test]
fn test_group_shipping_delivery_releases_only_its_own_weight() {
    // Two concurrent partial bookings on one 10T truck; delivering the first
    // must leave the second's weight committed.
    let mut state = create_test_state();
    state.loads = vec![seed_load("REQ-A", 4), seed_load("REQ-B", 6)];
    let mut ids = IdGenerator::new();

    let first = apply(
        &state,
        Command::CreateBooking {
            truck_id: String::from(TRUCK),
            load_id: String::from("REQ-A"),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();
    let booking_a = first.created_id.unwrap();
    let second = apply(
        &first.new_state,
        Command::CreateBooking {
            truck_id: String::from(TRUCK),
            load_id: String::from("REQ-B"),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();
    let booking_b = second.created_id.unwrap();

    let state = advance(&second.new_state, &mut ids, &booking_a, BookingStatus::Accepted).new_state;
    let state = advance(&state, &mut ids, &booking_b, BookingStatus::Accepted).new_state;
    assert_eq!(truck_capacity_filled(&state, TRUCK), 10);
    let truck = state.truck(TRUCK).unwrap();
    assert_eq!(truck_status(&state, truck), TruckStatus::Full);

    let state = advance(&state, &mut ids, &booking_a, BookingStatus::Pickup).new_state;
    let state = advance(&state, &mut ids, &booking_a, BookingStatus::InTransit).new_state;
    let state = advance(&state, &mut ids, &booking_a, BookingStatus::Delivered).new_state;

    assert_eq!(truck_capacity_filled(&state, TRUCK), 6);
    assert_capacity_invariant(&state);
}

// ============================================================================
// Revocation
// ============================================================================

#[test]
fn test_revoke_returns_load_to_market_without_touching_capacity() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = advance(&state, &mut ids, &booking_id, BookingStatus::Revoked);

    assert_eq!(
        result.new_state.booking(&booking_id).unwrap().status,
        BookingStatus::Revoked
    );
    assert_eq!(truck_capacity_filled(&result.new_state, TRUCK), 0);
    assert_eq!(
        result.new_state.load(SEED_LOAD).unwrap().status,
        LoadStatus::Pending
    );
    assert!(result.notifications.is_empty());
}

#[test]
fn test_revoked_load_can_be_rebooked() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Revoked).new_state;

    let result = apply(
        &state,
        Command::CreateBooking {
            truck_id: String::from(TRUCK),
            load_id: String::from(SEED_LOAD),
        },
        &mut ids,
        test_now(),
    );

    assert!(result.is_ok());
}

// ============================================================================
// Illegal Transitions
// ============================================================================

#[test]
fn test_illegal_transition_fails_and_preserves_state() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let before = state.clone();

    // Pending cannot jump straight to Delivered
    let result = apply(
        &state,
        Command::UpdateBookingStatus {
            booking_id: booking_id.clone(),
            new_status: BookingStatus::Delivered,
        },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidStatusTransition { .. })
    ));
    assert_eq!(state, before);
}

#[test]
fn test_unknown_booking_is_not_found() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();

    let result = apply(
        &state,
        Command::UpdateBookingStatus {
            booking_id: String::from("BKG-MISSING"),
            new_status: BookingStatus::Accepted,
        },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::BookingNotFound(_))
    ));
}

// ============================================================================
// SOS
// ============================================================================

#[test]
fn test_sos_rejected_while_pending() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = apply(
        &state,
        Command::TriggerSos {
            booking_id: booking_id.clone(),
        },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::SosUnavailable { .. })
    ));
}

#[test]
fn test_sos_on_committed_trip_flags_and_notifies_once() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Pickup).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::InTransit).new_state;

    let result = apply(
        &state,
        Command::TriggerSos {
            booking_id: booking_id.clone(),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();

    assert!(result.new_state.booking(&booking_id).unwrap().sos_active);
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].kind, NotificationKind::Sos);
    assert_eq!(result.notifications[0].user_id, OWNER);
}

#[test]
fn test_sos_retrigger_is_idempotent_and_silent() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted).new_state;

    let first = apply(
        &state,
        Command::TriggerSos {
            booking_id: booking_id.clone(),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();
    let second = apply(
        &first.new_state,
        Command::TriggerSos {
            booking_id: booking_id.clone(),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();

    assert!(second.new_state.booking(&booking_id).unwrap().sos_active);
    assert!(second.notifications.is_empty());
    assert_eq!(second.new_state, first.new_state);
}

#[test]
fn test_sos_rejected_after_delivery() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Accepted).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Pickup).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::InTransit).new_state;
    let state = advance(&state, &mut ids, &booking_id, BookingStatus::Delivered).new_state;

    let result = apply(
        &state,
        Command::TriggerSos { booking_id },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::SosUnavailable { .. })
    ));
}

// ============================================================================
// Messaging
// ============================================================================

#[test]
fn test_send_message_appends_in_order() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let first = apply(
        &state,
        Command::SendMessage {
            booking_id: booking_id.clone(),
            sender_id: String::from(OWNER),
            text: String::from("When do you depart?"),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();
    let second = apply(
        &first.new_state,
        Command::SendMessage {
            booking_id: booking_id.clone(),
            sender_id: String::from(super::helpers::TRUCKER),
            text: String::from("Monday morning."),
        },
        &mut ids,
        test_now(),
    )
    .unwrap();

    let texts: Vec<&str> = second
        .new_state
        .messages
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(texts, vec!["When do you depart?", "Monday morning."]);
}

#[test]
fn test_send_message_rejects_blank_text() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();
    let (state, booking_id) = state_with_booking(&state, &mut ids);

    let result = apply(
        &state,
        Command::SendMessage {
            booking_id,
            sender_id: String::from(OWNER),
            text: String::from("   "),
        },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::EmptyMessage)
    ));
}

#[test]
fn test_send_message_requires_existing_booking() {
    let state = create_test_state();
    let mut ids = IdGenerator::new();

    let result = apply(
        &state,
        Command::SendMessage {
            booking_id: String::from("BKG-MISSING"),
            sender_id: String::from(OWNER),
            text: String::from("Hello?"),
        },
        &mut ids,
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::BookingNotFound(_))
    ));
}
