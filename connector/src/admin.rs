/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StatsResponse {
    #[serde(default)]
    pub total_bookings: u64,
    #[serde(default)]
    pub pending_bookings: u64,
    #[serde(default)]
    pub confirmed_bookings: u64,
    #[serde(default)]
    pub completed_bookings: u64,
}

pub async fn get_stats(config: RequestConfig) -> Result<StatsResponse, ConnectorError> {
    let res = get_client(config, "admin/stats".to_string(), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}
