// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use load_link::State;
use load_link_domain::{LoadRequest, LoadStatus, Role, Truck, User};

pub const OWNER: &str = "USR-OWNER";
pub const TRUCKER: &str = "USR-TRUCKER";
pub const TRUCK: &str = "TRK-1";
pub const SEED_LOAD: &str = "REQ-SEED";

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

pub fn seed_truck() -> Truck {
    Truck {
        id: String::from(TRUCK),
        driver_id: String::from(TRUCKER),
        driver_name: String::from("Ravi Kumar"),
        vehicle_model: String::from("Tata LPT 3118"),
        origin: String::from("Pune"),
        destination: String::from("Nagpur"),
        departure_date: String::from("2026-03-02"),
        capacity_total: 10,
        price_per_ton: 3500,
        group_shipping_allowed: true,
        rating: 4.6,
    }
}

pub fn seed_load() -> LoadRequest {
    LoadRequest {
        id: String::from(SEED_LOAD),
        owner_id: String::from(OWNER),
        company_name: String::from("Mehta Steel Works"),
        goods_type: String::from("Steel coils"),
        weight: 2,
        origin: String::from("Pune"),
        destination: String::from("Nagpur"),
        target_price: 4000,
        status: LoadStatus::Pending,
        created_at: String::from("2026-01-01T00:00:00Z"),
    }
}

/// A roster of two users, one truck, and one pending load.
pub fn seed_state() -> State {
    State {
        users: vec![factory_owner(), trucker()],
        trucks: vec![seed_truck()],
        loads: vec![seed_load()],
        bookings: Vec::new(),
        messages: Vec::new(),
    }
}
