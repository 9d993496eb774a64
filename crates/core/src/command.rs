// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use load_link_domain::BookingStatus;

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. The session layer
/// fills in the acting user; the engine validates everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Post a new load request.
    CreateLoadRequest {
        /// The factory owner posting the load.
        owner_id: String,
        /// Company name shown alongside the request.
        company_name: String,
        /// Description of the goods.
        goods_type: String,
        /// Shipment weight in tons.
        weight: u32,
        /// Route origin.
        origin: String,
        /// Route destination.
        destination: String,
        /// The price the owner is aiming for.
        target_price: u32,
    },
    /// Request a booking of a truck against a load.
    ///
    /// Creation reserves nothing; capacity is committed at acceptance.
    CreateBooking {
        /// The truck to book.
        truck_id: String,
        /// The load to ship.
        load_id: String,
    },
    /// Advance (or decline) a booking along its lifecycle.
    UpdateBookingStatus {
        /// The booking to transition.
        booking_id: String,
        /// The requested successor status.
        new_status: BookingStatus,
    },
    /// Raise the driver's emergency signal on a committed trip.
    TriggerSos {
        /// The booking the driver is on.
        booking_id: String,
    },
    /// Append a chat message to a booking's log.
    SendMessage {
        /// The booking the message belongs to.
        booking_id: String,
        /// The author.
        sender_id: String,
        /// Message body.
        text: String,
    },
}
