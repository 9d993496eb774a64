// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, TransitionResult, apply};
use load_link_domain::{
    BookingStatus, IdGenerator, LoadRequest, LoadStatus, Role, Truck, User,
};
use time::OffsetDateTime;

pub const OWNER: &str = "USR-OWNER";
pub const TRUCKER: &str = "USR-TRUCKER";
pub const TRUCK: &str = "TRK-1";
pub const SEED_LOAD: &str = "REQ-SEED";

pub fn test_now() -> OffsetDateTime {
    // 2026-01-01T00:00:00Z
    OffsetDateTime::from_unix_timestamp(1_767_225_600).unwrap()
}

pub fn factory_owner() -> User {
    User {
        id: String::from(OWNER),
        role: Role::FactoryOwner,
        name: String::from("Asha Mehta"),
        phone: String::from("9812345670"),
        company_name: Some(String::from("Mehta Steel Works")),
    }
}

pub fn trucker() -> User {
    User {
        id: String::from(TRUCKER),
        role: Role::Trucker,
        name: String::from("Ravi Kumar"),
        phone: String::from("9812345671"),
        company_name: None,
    }
}

pub fn truck_with_capacity(capacity_total: u32) -> Truck {
    Truck {
        id: String::from(TRUCK),
        driver_id: String::from(TRUCKER),
        driver_name: String::from("Ravi Kumar"),
        vehicle_model: String::from("Tata LPT 3118"),
        origin: String::from("Pune"),
        destination: String::from("Nagpur"),
        departure_date: String::from("2026-03-02"),
        capacity_total,
        price_per_ton: 3500,
        group_shipping_allowed: true,
        rating: 4.6,
    }
}

pub fn seed_load(id: &str, weight: u32) -> LoadRequest {
    LoadRequest {
        id: String::from(id),
        owner_id: String::from(OWNER),
        company_name: String::from("Mehta Steel Works"),
        goods_type: String::from("Steel coils"),
        weight,
        origin: String::from("Pune"),
        destination: String::from("Nagpur"),
        target_price: 4000,
        status: LoadStatus::Pending,
        created_at: String::from("2026-01-01T00:00:00Z"),
    }
}

/// A roster of two users, one 10T truck at 3500/T, and one pending 2T load.
pub fn create_test_state() -> State {
    State {
        users: vec![factory_owner(), trucker()],
        trucks: vec![truck_with_capacity(10)],
        loads: vec![seed_load(SEED_LOAD, 2)],
        bookings: Vec::new(),
        messages: Vec::new(),
    }
}

/// Creates a booking against the seed load and returns the new state and
/// booking id.
pub fn state_with_booking(state: &State, ids: &mut IdGenerator) -> (State, String) {
    let result: TransitionResult = apply(
        state,
        Command::CreateBooking {
            truck_id: String::from(TRUCK),
            load_id: String::from(SEED_LOAD),
        },
        ids,
        test_now(),
    )
    .unwrap();
    let booking_id = result.created_id.unwrap();
    (result.new_state, booking_id)
}

/// Advances a booking one step, panicking on error.
pub fn advance(
    state: &State,
    ids: &mut IdGenerator,
    booking_id: &str,
    new_status: BookingStatus,
) -> TransitionResult {
    apply(
        state,
        Command::UpdateBookingStatus {
            booking_id: booking_id.to_string(),
            new_status,
        },
        ids,
        test_now(),
    )
    .unwrap()
}
