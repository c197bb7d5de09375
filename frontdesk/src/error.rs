/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use connector::ConnectorError;

/// Problems caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingCredentials,
    #[error("Please fill in your name, email and phone number")]
    MissingContactInfo,
    #[error("Please select a service and describe your project")]
    MissingServiceDetails,
    #[error("Please select the number of hours")]
    MissingHours,
    #[error("Please select date and time")]
    MissingSchedule,
    #[error("Unknown service: {0}")]
    UnknownService(String),
    #[error("The selected service is not billed by the hour")]
    HoursNotApplicable,
    #[error("Hours must be between 1 and 8, got {0}")]
    HoursOutOfRange(u32),
    #[error("{0} cannot be booked")]
    DateUnavailable(NaiveDate),
    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),
    #[error("Already on the first step")]
    NoPreviousStep,
    #[error("Already on the last step, submit the booking instead")]
    NoNextStep,
    #[error("Complete the previous steps before submitting")]
    NotReadyToSubmit,
    #[error("The booking has already been submitted")]
    AlreadySubmitted,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("The code must be 6 characters")]
    InvalidOtp,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please wait {0}s before requesting a new code")]
    CooldownActive(u32),
    #[error("This action is not available right now")]
    WrongMode,
    #[error("Project name is required")]
    MissingProjectName,
    #[error("Unknown project: {0}")]
    UnknownProject(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FrontdeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: ConnectorError,
    },
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Admin login required")]
    AdminRequired,
    #[error("Could not store credential: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FrontdeskError {
    pub fn api(source: ConnectorError, fallback: &str) -> Self {
        FrontdeskError::Api {
            message: source.user_message(fallback),
            source,
        }
    }

    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        FrontdeskError::Storage(Box::new(source))
    }
}
