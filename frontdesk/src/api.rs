/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use connector::admin::{self, StatsResponse};
use connector::auth::{self, AdminLoginResponse, LoginResponse, MeResponse, UserType};
use connector::bookings::{self, BookingResponse, BookingStatus, MakeBookingRequest, MakeBookingResponse};
use connector::projects::{self, MakeProjectRequest, ProjectResponse};
use connector::services::{self, Service};
use connector::{ConnectorError, RequestConfig};

/// Every remote operation the client state machines depend on.
/// Authenticated calls take the bearer credential explicitly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudioApi: Send + Sync {
    async fn me(&self, credential: &str) -> Result<MeResponse, ConnectorError>;

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ConnectorError>;

    async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminLoginResponse, ConnectorError>;

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ConnectorError>;

    async fn forgot_password(&self, email: &str, user_type: UserType)
    -> Result<(), ConnectorError>;

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
        user_type: UserType,
    ) -> Result<(), ConnectorError>;

    async fn services(&self) -> Result<Vec<Service>, ConnectorError>;

    async fn create_booking(
        &self,
        booking: &MakeBookingRequest,
    ) -> Result<MakeBookingResponse, ConnectorError>;

    async fn bookings(&self, credential: &str) -> Result<Vec<BookingResponse>, ConnectorError>;

    async fn update_booking_status(
        &self,
        credential: &str,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ConnectorError>;

    async fn projects(&self) -> Result<Vec<ProjectResponse>, ConnectorError>;

    async fn create_project(
        &self,
        credential: &str,
        project: &MakeProjectRequest,
    ) -> Result<(), ConnectorError>;

    async fn update_project(
        &self,
        credential: &str,
        id: &str,
        project: &MakeProjectRequest,
    ) -> Result<(), ConnectorError>;

    async fn delete_project(&self, credential: &str, id: &str) -> Result<(), ConnectorError>;

    async fn stats(&self, credential: &str) -> Result<StatsResponse, ConnectorError>;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    server_url: String,
}

impl HttpApi {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn config(&self) -> RequestConfig {
        RequestConfig::new(self.server_url.clone())
    }

    fn authed(&self, credential: &str) -> RequestConfig {
        self.config().with_token(credential)
    }
}

#[async_trait]
impl StudioApi for HttpApi {
    async fn me(&self, credential: &str) -> Result<MeResponse, ConnectorError> {
        auth::get_me(self.authed(credential)).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ConnectorError> {
        auth::post_login(self.config(), email.to_string(), password.to_string()).await
    }

    async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminLoginResponse, ConnectorError> {
        auth::post_admin_login(self.config(), email.to_string(), password.to_string()).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ConnectorError> {
        auth::post_register(
            self.config(),
            name.to_string(),
            email.to_string(),
            password.to_string(),
        )
        .await
    }

    async fn forgot_password(
        &self,
        email: &str,
        user_type: UserType,
    ) -> Result<(), ConnectorError> {
        auth::post_forgot_password(self.config(), email.to_string(), user_type).await
    }

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
        user_type: UserType,
    ) -> Result<(), ConnectorError> {
        auth::post_reset_password(
            self.config(),
            email.to_string(),
            otp.to_string(),
            new_password.to_string(),
            user_type,
        )
        .await
    }

    async fn services(&self) -> Result<Vec<Service>, ConnectorError> {
        services::get(self.config()).await
    }

    async fn create_booking(
        &self,
        booking: &MakeBookingRequest,
    ) -> Result<MakeBookingResponse, ConnectorError> {
        bookings::post(self.config(), booking).await
    }

    async fn bookings(&self, credential: &str) -> Result<Vec<BookingResponse>, ConnectorError> {
        bookings::get(self.authed(credential)).await
    }

    async fn update_booking_status(
        &self,
        credential: &str,
        id: &str,
        status: BookingStatus,
    ) -> Result<(), ConnectorError> {
        bookings::put_status(self.authed(credential), id.to_string(), status).await
    }

    async fn projects(&self) -> Result<Vec<ProjectResponse>, ConnectorError> {
        projects::get(self.config()).await
    }

    async fn create_project(
        &self,
        credential: &str,
        project: &MakeProjectRequest,
    ) -> Result<(), ConnectorError> {
        projects::post(self.authed(credential), project).await
    }

    async fn update_project(
        &self,
        credential: &str,
        id: &str,
        project: &MakeProjectRequest,
    ) -> Result<(), ConnectorError> {
        projects::put(self.authed(credential), id.to_string(), project).await
    }

    async fn delete_project(&self, credential: &str, id: &str) -> Result<(), ConnectorError> {
        projects::delete(self.authed(credential), id.to_string()).await
    }

    async fn stats(&self, credential: &str) -> Result<StatsResponse, ConnectorError> {
        admin::get_stats(self.authed(credential)).await
    }
}
