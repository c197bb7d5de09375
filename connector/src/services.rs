/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Display string such as `₹299/hr`; absent for project based work.
    #[serde(default)]
    pub price: Option<String>,
    /// Older service records do not carry the flag at all.
    #[serde(default)]
    pub requires_hours: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn get(config: RequestConfig) -> Result<Vec<Service>, ConnectorError> {
    let res = get_client(config, "services".to_string(), RequestType::GET, false)?
        .send()
        .await?;

    parse_response(res).await
}
