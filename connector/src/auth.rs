/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MeResponse {
    pub user: UserResponse,
    #[serde(default)]
    pub role: String,
}

impl MeResponse {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: UserResponse,
}

/// Which account table a password reset targets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    User,
    Admin,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub user_type: UserType,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub user_type: UserType,
}

pub async fn get_me(config: RequestConfig) -> Result<MeResponse, ConnectorError> {
    let res = get_client(config, "auth/me".to_string(), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_login(
    config: RequestConfig,
    email: String,
    password: String,
) -> Result<LoginResponse, ConnectorError> {
    let req = MakeLoginRequest { email, password };

    let res = get_client(config, "auth/login".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_admin_login(
    config: RequestConfig,
    email: String,
    password: String,
) -> Result<AdminLoginResponse, ConnectorError> {
    let req = MakeLoginRequest { email, password };

    let res = get_client(config, "admin/login".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_register(
    config: RequestConfig,
    name: String,
    email: String,
    password: String,
) -> Result<LoginResponse, ConnectorError> {
    let req = MakeUserRequest {
        name,
        email,
        password,
    };

    let res = get_client(config, "auth/register".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_forgot_password(
    config: RequestConfig,
    email: String,
    user_type: UserType,
) -> Result<(), ConnectorError> {
    let req = ForgotPasswordRequest { email, user_type };

    let res = get_client(
        config,
        "auth/forgot-password".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_ack(res).await
}

pub async fn post_reset_password(
    config: RequestConfig,
    email: String,
    otp: String,
    new_password: String,
    user_type: UserType,
) -> Result<(), ConnectorError> {
    let req = ResetPasswordRequest {
        email,
        otp,
        new_password,
        user_type,
    };

    let res = get_client(
        config,
        "auth/reset-password".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_ack(res).await
}
