// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity id generation.
//!
//! Ids are opaque strings built from a constant-width type prefix, a
//! zero-padded millisecond timestamp, and a sequence number. Because the
//! prefix is constant width, ids of one entity type sort lexicographically
//! in creation order; history views rely on that for their default ordering.

/// The entity type prefix baked into each generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    /// Load requests (`REQ`).
    Load,
    /// Bookings (`BKG`).
    Booking,
    /// Chat messages (`MSG`).
    Message,
    /// Notifications (`NTF`).
    Notification,
}

impl IdPrefix {
    /// Returns the constant-width prefix string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "REQ",
            Self::Booking => "BKG",
            Self::Message => "MSG",
            Self::Notification => "NTF",
        }
    }
}

/// Generates unique, creation-ordered entity ids.
///
/// The generator never moves backwards: if the supplied clock reads earlier
/// than a previously observed instant, the previous instant is reused and
/// the sequence number disambiguates. Two ids produced by the same generator
/// are therefore always distinct and ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    last_millis: u64,
    sequence: u16,
}

impl IdGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_millis: 0,
            sequence: 0,
        }
    }

    /// Produces the next id for the given entity type.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The entity type prefix
    /// * `now_millis` - The current wall clock in Unix milliseconds
    pub fn next(&mut self, prefix: IdPrefix, now_millis: u64) -> String {
        if now_millis > self.last_millis {
            self.last_millis = now_millis;
            self.sequence = 0;
        } else {
            // Same millisecond, or a clock that stepped backwards: keep the
            // observed instant and bump the sequence to stay monotonic.
            self.sequence = self.sequence.wrapping_add(1);
        }
        format!(
            "{}-{:013}-{:04}",
            prefix.as_str(),
            self.last_millis,
            self.sequence
        )
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
