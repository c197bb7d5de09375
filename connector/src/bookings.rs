/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    /// Anything the server sends outside the known set, kept verbatim.
    Other(String),
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(other) => other,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match BookingStatus::from(s.trim().to_lowercase()) {
            BookingStatus::Other(other) => Err(format!(
                "`{}` is not a booking status (pending, confirmed, completed, cancelled)",
                other
            )),
            status => Ok(status),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookingResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub hours: Option<u32>,
    pub status: BookingStatus,
}

/// Body of the booking creation call. `preferred_date` is a `YYYY-MM-DD`
/// calendar date and `hours` serializes as `null` for non-hourly services.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MakeBookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub service_name: String,
    pub description: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub hours: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreatedBooking {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MakeBookingResponse {
    #[serde(default)]
    pub booking: Option<CreatedBooking>,
}

impl MakeBookingResponse {
    pub fn booking_id(&self) -> Option<String> {
        self.booking.as_ref().and_then(|b| b.id.clone())
    }
}

#[derive(Serialize, Deserialize, Debug)]
struct PutStatusRequest {
    pub status: BookingStatus,
}

pub async fn post(
    config: RequestConfig,
    booking: &MakeBookingRequest,
) -> Result<MakeBookingResponse, ConnectorError> {
    let res = get_client(config, "bookings".to_string(), RequestType::POST, false)?
        .json(booking)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get(config: RequestConfig) -> Result<Vec<BookingResponse>, ConnectorError> {
    let res = get_client(config, "bookings".to_string(), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_status(
    config: RequestConfig,
    booking: String,
    status: BookingStatus,
) -> Result<(), ConnectorError> {
    let req = PutStatusRequest { status };

    let res = get_client(
        config,
        format!("bookings/{}/status", booking),
        RequestType::PUT,
        true,
    )?
    .json(&req)
    .send()
    .await?;

    parse_ack(res).await
}
