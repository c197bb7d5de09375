/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::StudioApi;
use crate::error::FrontdeskError;
use crate::session::Session;
use crate::storage::CredentialStore;
use connector::admin::StatsResponse;
use connector::bookings::BookingResponse;

pub const RECENT_BOOKINGS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub stats: StatsResponse,
    pub recent: Vec<BookingResponse>,
}

impl Overview {
    /// Stats and bookings are independent, so both requests run at once.
    pub async fn load<A: StudioApi, S: CredentialStore>(
        session: &Session<A, S>,
    ) -> Result<Self, FrontdeskError> {
        let credential = session.require_admin()?;
        let api = session.api();

        let (stats, mut recent) = tokio::try_join!(api.stats(credential), api.bookings(credential))
            .map_err(|e| FrontdeskError::api(e, "Failed to fetch data"))?;

        recent.truncate(RECENT_BOOKINGS);
        Ok(Self { stats, recent })
    }

    pub fn cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                label: "Total Bookings",
                value: self.stats.total_bookings,
            },
            StatCard {
                label: "Pending",
                value: self.stats.pending_bookings,
            },
            StatCard {
                label: "Confirmed",
                value: self.stats.confirmed_bookings,
            },
            StatCard {
                label: "Completed",
                value: self.stats.completed_bookings,
            },
        ]
    }
}
