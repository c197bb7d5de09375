/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::services::Service;

pub const PROJECT_BASED: &str = "Project Based";

/// Services billed per hour when the server omits `requires_hours`.
/// Only consulted for records without the flag.
pub const HOURLY_FALLBACK_NAMES: [&str; 2] = ["Dubbing", "Vocal Recording"];

pub fn requires_hours(service: &Service) -> bool {
    service
        .requires_hours
        .unwrap_or_else(|| HOURLY_FALLBACK_NAMES.contains(&service.name.as_str()))
}

pub fn price_label(service: &Service) -> &str {
    match service.price.as_deref() {
        Some(price) if !price.trim().is_empty() => price,
        _ => PROJECT_BASED,
    }
}

/// First run of ASCII digits in a display price: `₹299/hr` gives 299.
pub fn base_price(price: &str) -> Option<u64> {
    let digits: String = price
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}

pub fn hourly_total(price: &str, hours: u32) -> Option<u64> {
    base_price(price).map(|base| base.saturating_mul(u64::from(hours)))
}
