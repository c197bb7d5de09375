/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::StudioApi;
use crate::error::FrontdeskError;
use crate::session::Session;
use crate::storage::CredentialStore;
use connector::bookings::{BookingResponse, BookingStatus};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(&self, status: &BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            filter => filter.as_ref() == status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Yellow,
    Green,
    Purple,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

impl StatusBadge {
    /// Unrecognised statuses get the pending tone but keep their own label.
    pub fn new(status: &BookingStatus) -> Self {
        let tone = match status {
            BookingStatus::Confirmed => BadgeTone::Green,
            BookingStatus::Completed => BadgeTone::Purple,
            BookingStatus::Cancelled => BadgeTone::Red,
            BookingStatus::Pending | BookingStatus::Other(_) => BadgeTone::Yellow,
        };

        Self {
            label: capitalize(status.as_str()),
            tone,
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Admin booking table. The list is always the server's; status changes are
/// never applied locally, the view re-fetches instead.
#[derive(Debug, Clone, Default)]
pub struct BookingsView {
    bookings: Vec<BookingResponse>,
    search: String,
    filter: StatusFilter,
    loaded: bool,
}

impl BookingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh<A: StudioApi, S: CredentialStore>(
        &mut self,
        session: &Session<A, S>,
    ) -> Result<(), FrontdeskError> {
        let credential = session.require_admin()?;

        self.bookings = session
            .api()
            .bookings(credential)
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to fetch bookings"))?;
        self.loaded = true;

        tracing::debug!(count = self.bookings.len(), "fetched bookings");
        Ok(())
    }

    pub async fn update_status<A: StudioApi, S: CredentialStore>(
        &mut self,
        session: &Session<A, S>,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), FrontdeskError> {
        let credential = session.require_admin()?;

        session
            .api()
            .update_booking_status(credential, id, status.clone())
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to update status"))?;

        tracing::info!(booking = id, %status, "booking status updated");
        self.refresh(session).await
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn bookings(&self) -> &[BookingResponse] {
        &self.bookings
    }

    pub fn find(&self, id: &str) -> Option<&BookingResponse> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    /// Rows matching both the status filter and the case-insensitive search
    /// over name, email and service.
    pub fn visible(&self) -> Vec<&BookingResponse> {
        let needle = self.search.trim().to_lowercase();

        self.bookings
            .iter()
            .filter(|booking| self.filter.matches(&booking.status))
            .filter(|booking| {
                needle.is_empty()
                    || [&booking.full_name, &booking.email, &booking.service_name]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
