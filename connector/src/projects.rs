/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub work_type: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Shared body of the create and update calls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MakeProjectRequest {
    pub name: String,
    pub description: String,
    pub work_type: String,
    pub image_url: String,
    pub featured: bool,
}

pub async fn get(config: RequestConfig) -> Result<Vec<ProjectResponse>, ConnectorError> {
    let res = get_client(config, "projects".to_string(), RequestType::GET, false)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post(
    config: RequestConfig,
    project: &MakeProjectRequest,
) -> Result<(), ConnectorError> {
    let res = get_client(config, "projects".to_string(), RequestType::POST, true)?
        .json(project)
        .send()
        .await?;

    parse_ack(res).await
}

pub async fn put(
    config: RequestConfig,
    id: String,
    project: &MakeProjectRequest,
) -> Result<(), ConnectorError> {
    let res = get_client(config, format!("projects/{}", id), RequestType::PUT, true)?
        .json(project)
        .send()
        .await?;

    parse_ack(res).await
}

pub async fn delete(config: RequestConfig, id: String) -> Result<(), ConnectorError> {
    let res = get_client(
        config,
        format!("projects/{}", id),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_ack(res).await
}
