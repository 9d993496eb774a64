// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-time pickup code generation.

/// Generates a 6-digit numeric one-time code.
///
/// The code is drawn uniformly from `100000..=999999`, so it is always
/// exactly six digits. A fresh code is generated per acceptance and never
/// reused across bookings.
#[must_use]
pub fn generate_otp() -> String {
    let code: u32 = rand::random_range(100_000..1_000_000);
    format!("{code}")
}
