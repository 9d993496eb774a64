// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod error;
mod ids;
mod otp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::{Booking, BookingStatus};
pub use error::DomainError;
pub use ids::{IdGenerator, IdPrefix};
pub use otp::generate_otp;
pub use types::{ChatMessage, LoadRequest, LoadStatus, Role, Truck, TruckStatus, User};
pub use validation::{validate_load_fields, validate_message_text};
