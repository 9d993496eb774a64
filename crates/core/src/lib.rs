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

mod apply;
mod command;
mod error;
mod queries;
mod session;
mod snapshot;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use queries::{
    bookings_for_participant, bookings_with_status, committed_earnings, messages_for_booking,
    realized_earnings, truck_capacity_filled, truck_capacity_remaining, truck_status,
};
pub use session::{NewLoadRequest, Session};
pub use snapshot::{SnapshotError, SnapshotSink};
pub use state::{State, TransitionResult};
