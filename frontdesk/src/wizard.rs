/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Three step booking form: contact info, service details, scheduling.
//!
//! [`transition`] is a pure function over [`WizardState`]; [`BookingWizard`]
//! owns the state and performs the single creation request at the end.

use crate::api::StudioApi;
use crate::error::{FrontdeskError, ValidationError};
use crate::pricing::requires_hours;
use crate::schedule::Scheduled;
use crate::session::Session;
use chrono::{Datelike, NaiveDate, Weekday};
use connector::auth::UserResponse;
use connector::bookings::MakeBookingRequest;
use connector::services::Service;
use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

pub const HOUR_OPTIONS: RangeInclusive<u32> = 1..=8;

pub const TIME_SLOTS: [&str; 9] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
    "05:00 PM", "06:00 PM",
];

pub const SIGNUP_PROMPT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub service_name: String,
    pub description: String,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub hours: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ContactInfo,
    ServiceDetails,
    Scheduling,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::ContactInfo => 1,
            Step::ServiceDetails => 2,
            Step::Scheduling => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::ContactInfo => "Contact Information",
            Step::ServiceDetails => "Service Details",
            Step::Scheduling => "Select Date & Time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub booking_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub service_name: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub hours: Option<u32>,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Booking confirmed! Check your email for details.")?;
        if let Some(id) = &self.booking_id {
            writeln!(f, "Reference: {}", id)?;
        }
        writeln!(f, "Service: {}", self.service_name)?;
        writeln!(f, "Date: {}", self.preferred_date.format("%A, %-d %B %Y"))?;
        write!(f, "Time: {}", self.preferred_time)?;
        if let Some(hours) = self.hours {
            write!(f, "\nDuration: {} hour(s)", hours)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    ContactInfo(BookingDraft),
    ServiceDetails(BookingDraft),
    Scheduling(BookingDraft),
    Submitted(Confirmation),
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::ContactInfo(BookingDraft::default())
    }
}

impl WizardState {
    fn at(step: Step, draft: BookingDraft) -> Self {
        match step {
            Step::ContactInfo => WizardState::ContactInfo(draft),
            Step::ServiceDetails => WizardState::ServiceDetails(draft),
            Step::Scheduling => WizardState::Scheduling(draft),
        }
    }

    pub fn step(&self) -> Option<Step> {
        match self {
            WizardState::ContactInfo(_) => Some(Step::ContactInfo),
            WizardState::ServiceDetails(_) => Some(Step::ServiceDetails),
            WizardState::Scheduling(_) => Some(Step::Scheduling),
            WizardState::Submitted(_) => None,
        }
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        match self {
            WizardState::ContactInfo(draft)
            | WizardState::ServiceDetails(draft)
            | WizardState::Scheduling(draft) => Some(draft),
            WizardState::Submitted(_) => None,
        }
    }

    fn draft_mut(&mut self) -> Option<&mut BookingDraft> {
        match self {
            WizardState::ContactInfo(draft)
            | WizardState::ServiceDetails(draft)
            | WizardState::Scheduling(draft) => Some(draft),
            WizardState::Submitted(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    SetFullName(String),
    SetEmail(String),
    SetPhone(String),
    SelectService(String),
    SetDescription(String),
    SetHours(u32),
    SelectDate(NaiveDate),
    SelectTime(String),
    Next,
    Back,
    /// The creation request succeeded.
    Confirmed { booking_id: Option<String> },
}

#[derive(Debug, Clone)]
pub struct WizardContext {
    pub services: Vec<Service>,
    pub today: NaiveDate,
}

impl WizardContext {
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn selected(&self, draft: &BookingDraft) -> Option<&Service> {
        self.service(&draft.service_id)
    }

    pub fn requires_hours(&self, draft: &BookingDraft) -> bool {
        self.selected(draft).is_some_and(requires_hours)
    }
}

/// Bookings start tomorrow at the earliest. Sundays are closed.
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today && date.weekday() != Weekday::Sun
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Guard for leaving `step` forwards.
pub fn check_step(
    step: Step,
    draft: &BookingDraft,
    context: &WizardContext,
) -> Result<(), ValidationError> {
    match step {
        Step::ContactInfo => {
            if !(filled(&draft.full_name) && filled(&draft.email) && filled(&draft.phone)) {
                return Err(ValidationError::MissingContactInfo);
            }
        }
        Step::ServiceDetails => {
            if context.selected(draft).is_none() || !filled(&draft.description) {
                return Err(ValidationError::MissingServiceDetails);
            }

            if context.requires_hours(draft) && !draft.hours.is_some_and(|hours| hours > 0) {
                return Err(ValidationError::MissingHours);
            }
        }
        Step::Scheduling => {
            if draft.preferred_date.is_none() || !filled(&draft.preferred_time) {
                return Err(ValidationError::MissingSchedule);
            }
        }
    }

    Ok(())
}

fn check_all(draft: &BookingDraft, context: &WizardContext) -> Result<(), ValidationError> {
    check_step(Step::ContactInfo, draft, context)?;
    check_step(Step::ServiceDetails, draft, context)?;
    check_step(Step::Scheduling, draft, context)
}

/// Serialized creation payload. Hours are dropped for services that are not
/// billed by the hour.
pub fn booking_request(
    draft: &BookingDraft,
    context: &WizardContext,
) -> Result<MakeBookingRequest, ValidationError> {
    check_all(draft, context)?;

    let preferred_date = draft
        .preferred_date
        .ok_or(ValidationError::MissingSchedule)?;

    Ok(MakeBookingRequest {
        full_name: draft.full_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        service_id: draft.service_id.clone(),
        service_name: draft.service_name.clone(),
        description: draft.description.trim().to_string(),
        preferred_date: preferred_date.format("%Y-%m-%d").to_string(),
        preferred_time: draft.preferred_time.clone(),
        hours: if context.requires_hours(draft) {
            draft.hours
        } else {
            None
        },
    })
}

fn confirm(
    draft: &BookingDraft,
    context: &WizardContext,
    booking_id: Option<String>,
) -> Result<Confirmation, ValidationError> {
    let request = booking_request(draft, context)?;
    let preferred_date = draft
        .preferred_date
        .ok_or(ValidationError::MissingSchedule)?;

    Ok(Confirmation {
        booking_id,
        full_name: request.full_name,
        email: request.email,
        service_name: request.service_name,
        preferred_date,
        preferred_time: request.preferred_time,
        hours: request.hours,
    })
}

pub fn transition(
    state: &WizardState,
    event: WizardEvent,
    context: &WizardContext,
) -> Result<WizardState, ValidationError> {
    let (Some(step), Some(draft)) = (state.step(), state.draft()) else {
        return Err(ValidationError::AlreadySubmitted);
    };

    let mut draft = draft.clone();

    match event {
        WizardEvent::SetFullName(value) => draft.full_name = value,
        WizardEvent::SetEmail(value) => draft.email = value,
        WizardEvent::SetPhone(value) => draft.phone = value,
        WizardEvent::SetDescription(value) => draft.description = value,
        WizardEvent::SelectService(id) => {
            let service = context
                .service(&id)
                .ok_or_else(|| ValidationError::UnknownService(id.clone()))?;

            draft.service_name = service.name.clone();
            draft.service_id = id;
            draft.hours = None;
        }
        WizardEvent::SetHours(hours) => {
            if !context.requires_hours(&draft) {
                return Err(ValidationError::HoursNotApplicable);
            }

            if !HOUR_OPTIONS.contains(&hours) {
                return Err(ValidationError::HoursOutOfRange(hours));
            }

            draft.hours = Some(hours);
        }
        WizardEvent::SelectDate(date) => {
            if !is_bookable_date(date, context.today) {
                return Err(ValidationError::DateUnavailable(date));
            }

            draft.preferred_date = Some(date);
        }
        WizardEvent::SelectTime(time) => {
            let slot = TIME_SLOTS
                .iter()
                .find(|slot| slot.eq_ignore_ascii_case(time.trim()))
                .ok_or_else(|| ValidationError::UnknownTimeSlot(time.clone()))?;

            draft.preferred_time = slot.to_string();
        }
        WizardEvent::Next => {
            check_step(step, &draft, context)?;

            let next = match step {
                Step::ContactInfo => Step::ServiceDetails,
                Step::ServiceDetails => Step::Scheduling,
                Step::Scheduling => return Err(ValidationError::NoNextStep),
            };

            return Ok(WizardState::at(next, draft));
        }
        WizardEvent::Back => {
            let previous = match step {
                Step::ContactInfo => return Err(ValidationError::NoPreviousStep),
                Step::ServiceDetails => Step::ContactInfo,
                Step::Scheduling => Step::ServiceDetails,
            };

            return Ok(WizardState::at(previous, draft));
        }
        WizardEvent::Confirmed { booking_id } => {
            if step != Step::Scheduling {
                return Err(ValidationError::NotReadyToSubmit);
            }

            return Ok(WizardState::Submitted(confirm(&draft, context, booking_id)?));
        }
    }

    Ok(WizardState::at(step, draft))
}

/// Offered to anonymous customers shortly after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupPrompt {
    pub booking_id: Option<String>,
}

pub struct SubmitOutcome {
    pub confirmation: Confirmation,
    pub signup_prompt: Option<Scheduled<SignupPrompt>>,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    state: WizardState,
    context: WizardContext,
}

impl BookingWizard {
    pub fn new(services: Vec<Service>, today: NaiveDate) -> Self {
        Self {
            state: WizardState::default(),
            context: WizardContext { services, today },
        }
    }

    pub async fn load<A: StudioApi>(api: &A, today: NaiveDate) -> Result<Self, FrontdeskError> {
        let services = api
            .services()
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to load services"))?;

        tracing::debug!(count = services.len(), "loaded service catalog");
        Ok(Self::new(services, today))
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Option<Step> {
        self.state.step()
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        self.state.draft()
    }

    pub fn services(&self) -> &[Service] {
        &self.context.services
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.draft().and_then(|draft| self.context.selected(draft))
    }

    pub fn requires_hours(&self) -> bool {
        self.draft()
            .is_some_and(|draft| self.context.requires_hours(draft))
    }

    /// On error the state is left exactly as it was.
    pub fn apply(&mut self, event: WizardEvent) -> Result<(), ValidationError> {
        self.state = transition(&self.state, event, &self.context)?;
        Ok(())
    }

    /// Logged in customers start with their name and email filled in.
    pub fn prefill(&mut self, identity: &UserResponse) {
        if let Some(draft) = self.state.draft_mut() {
            if filled(&identity.name) {
                draft.full_name = identity.name.clone();
            }
            if filled(&identity.email) {
                draft.email = identity.email.clone();
            }
        }
    }

    /// Selects a service by its display name, as linked from a service page.
    pub fn preselect_service(&mut self, name: &str) -> bool {
        let Some(id) = self
            .context
            .services
            .iter()
            .find(|service| service.name.eq_ignore_ascii_case(name.trim()))
            .map(|service| service.id.clone())
        else {
            return false;
        };

        self.apply(WizardEvent::SelectService(id)).is_ok()
    }

    pub async fn submit<A: StudioApi, S>(
        &mut self,
        session: &Session<A, S>,
    ) -> Result<SubmitOutcome, FrontdeskError> {
        let draft = match &self.state {
            WizardState::Scheduling(draft) => draft,
            WizardState::Submitted(_) => return Err(ValidationError::AlreadySubmitted.into()),
            _ => return Err(ValidationError::NotReadyToSubmit.into()),
        };

        let request = booking_request(draft, &self.context)?;

        let res = session
            .api()
            .create_booking(&request)
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to create booking. Please try again."))?;

        let booking_id = res.booking_id();
        let confirmation = confirm(draft, &self.context, booking_id.clone())?;
        tracing::info!(booking_id = ?booking_id, service = %request.service_name, "booking created");

        self.state = WizardState::Submitted(confirmation.clone());

        let signup_prompt = (!session.is_logged_in())
            .then(|| Scheduled::after(SIGNUP_PROMPT_DELAY, SignupPrompt { booking_id }));

        Ok(SubmitOutcome {
            confirmation,
            signup_prompt,
        })
    }
}
