// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates the user-supplied fields of a new load request.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `goods_type` - Description of the goods
/// * `weight` - Shipment weight in tons
/// * `origin` - Route origin
/// * `destination` - Route destination
///
/// # Errors
///
/// Returns an error if:
/// - The goods description is empty
/// - The weight is zero
/// - Either endpoint of the route is empty
/// - Origin and destination name the same place
pub fn validate_load_fields(
    goods_type: &str,
    weight: u32,
    origin: &str,
    destination: &str,
) -> Result<(), DomainError> {
    if goods_type.trim().is_empty() {
        return Err(DomainError::InvalidGoodsType(String::from(
            "Goods type cannot be empty",
        )));
    }

    // Rule: weight must be a positive number of tons
    if weight == 0 {
        return Err(DomainError::InvalidWeight(String::from(
            "Weight must be greater than zero",
        )));
    }

    let origin = origin.trim();
    let destination = destination.trim();

    if origin.is_empty() {
        return Err(DomainError::InvalidRoute(String::from(
            "Origin cannot be empty",
        )));
    }
    if destination.is_empty() {
        return Err(DomainError::InvalidRoute(String::from(
            "Destination cannot be empty",
        )));
    }

    // Rule: a load must actually travel somewhere
    if origin.eq_ignore_ascii_case(destination) {
        return Err(DomainError::InvalidRoute(String::from(
            "Origin and destination must differ",
        )));
    }

    Ok(())
}

/// Validates chat message text.
///
/// # Errors
///
/// Returns `DomainError::EmptyMessage` if the text is empty or
/// whitespace-only.
pub fn validate_message_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::EmptyMessage);
    }
    Ok(())
}
