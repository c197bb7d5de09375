/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::MockStudioApi;
use crate::session::Session;
use crate::storage::{CredentialStore, MemoryStore};
use chrono::NaiveDate;
use connector::ConnectorError;
use connector::auth::{MeResponse, UserResponse};
use connector::bookings::{BookingResponse, BookingStatus};
use connector::projects::ProjectResponse;
use connector::services::Service;

pub fn user(id: &str, name: &str, email: &str) -> UserResponse {
    UserResponse {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
    }
}

#[derive(Debug, thiserror::Error)]
#[error("credential store is read-only")]
pub struct ReadOnly;

/// A store that refuses every write.
pub struct ReadOnlyStore;

impl CredentialStore for ReadOnlyStore {
    type Error = ReadOnly;

    fn load(&self) -> Option<String> {
        None
    }

    fn save(&mut self, _credential: &str) -> Result<(), Self::Error> {
        Err(ReadOnly)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Err(ReadOnly)
    }
}

pub fn unauthorized() -> ConnectorError {
    ConnectorError::Api {
        status: 401,
        detail: Some("Could not validate credentials".to_string()),
    }
}

pub fn server_error() -> ConnectorError {
    ConnectorError::Api {
        status: 500,
        detail: None,
    }
}

pub fn catalog() -> Vec<Service> {
    vec![
        Service {
            id: "svc-mix".to_string(),
            name: "Mixing & Mastering".to_string(),
            price: Some("₹2999".to_string()),
            requires_hours: Some(false),
            description: None,
        },
        Service {
            id: "svc-dub".to_string(),
            name: "Dubbing".to_string(),
            price: Some("₹299/hr".to_string()),
            requires_hours: Some(true),
            description: None,
        },
        Service {
            id: "svc-vocal".to_string(),
            name: "Vocal Recording".to_string(),
            price: Some("₹399/hr".to_string()),
            requires_hours: None,
            description: None,
        },
        Service {
            id: "svc-score".to_string(),
            name: "Film Scoring".to_string(),
            price: None,
            requires_hours: None,
            description: None,
        },
    ]
}

/// A Sunday, so the first bookable day after it is a Monday.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn next_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn booking(id: &str, name: &str, service: &str, status: BookingStatus) -> BookingResponse {
    BookingResponse {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+1555".to_string(),
        service_name: service.to_string(),
        description: String::new(),
        preferred_date: "2026-10-19".to_string(),
        preferred_time: "10:00 AM".to_string(),
        hours: None,
        status,
    }
}

pub fn project(id: &str, name: &str, work_type: &str) -> ProjectResponse {
    ProjectResponse {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        work_type: work_type.to_string(),
        image_url: None,
        featured: true,
    }
}

/// An admin session resolved from a stored `tok-admin` credential.
pub async fn admin_session(mut api: MockStudioApi) -> Session<MockStudioApi, MemoryStore> {
    api.expect_me().returning(|_| {
        Ok(MeResponse {
            user: user("a1", "Admin", "admin@studio.com"),
            role: "admin".to_string(),
        })
    });

    let mut session = Session::new(api, MemoryStore::with_credential("tok-admin"));
    session.bootstrap().await;
    session
}
