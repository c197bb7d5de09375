/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use chrono::{Days, Local, NaiveDate};
use frontdesk::pricing::{hourly_total, price_label};
use frontdesk::wizard::{
    BookingWizard, HOUR_OPTIONS, Step, TIME_SLOTS, WizardEvent, is_bookable_date,
};

/// Days offered in the date picker, counted from tomorrow.
const DATE_WINDOW: u64 = 21;

fn apply_or_warn(wizard: &mut BookingWizard, event: WizardEvent) -> bool {
    match wizard.apply(event) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{}", e);
            false
        }
    }
}

fn contact_step(wizard: &mut BookingWizard) {
    let Some(draft) = wizard.draft().cloned() else {
        return;
    };

    let full_name = ask_with_default("Full name", &draft.full_name);
    let email = ask_with_default("Email", &draft.email);
    let phone = ask_with_default("Phone", &draft.phone);

    apply_or_warn(wizard, WizardEvent::SetFullName(full_name));
    apply_or_warn(wizard, WizardEvent::SetEmail(email));
    apply_or_warn(wizard, WizardEvent::SetPhone(phone));
}

fn service_step(wizard: &mut BookingWizard) {
    let Some(draft) = wizard.draft().cloned() else {
        return;
    };

    if draft.service_id.is_empty() || confirm("Choose a different service?") {
        for (i, service) in wizard.services().iter().enumerate() {
            println!("{}. {} ({})", i + 1, service.name, price_label(service));
        }

        let choice = ask_for_choice("Service", wizard.services().len());
        let id = wizard.services()[choice].id.clone();
        apply_or_warn(wizard, WizardEvent::SelectService(id));
    }

    if wizard.requires_hours() {
        let price = wizard
            .selected_service()
            .and_then(|service| service.price.clone())
            .unwrap_or_default();

        for hours in HOUR_OPTIONS {
            match hourly_total(&price, hours) {
                Some(total) => println!("{} hour(s): {}", hours, total),
                None => println!("{} hour(s)", hours),
            }
        }

        let current = draft.hours.map(|h| h.to_string()).unwrap_or_default();
        let hours = ask_with_default("Hours", &current);
        match hours.parse::<u32>() {
            Ok(hours) => {
                apply_or_warn(wizard, WizardEvent::SetHours(hours));
            }
            Err(_) => eprintln!("Hours must be a number."),
        }
    }

    let description = ask_with_default("Describe your project", &draft.description);
    apply_or_warn(wizard, WizardEvent::SetDescription(description));
}

fn bookable_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=DATE_WINDOW)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|date| is_bookable_date(*date, today))
        .collect()
}

fn schedule_step(wizard: &mut BookingWizard, today: NaiveDate) {
    let dates = bookable_dates(today);
    for (i, date) in dates.iter().enumerate() {
        println!("{}. {}", i + 1, date.format("%a, %-d %b %Y"));
    }
    let date = dates[ask_for_choice("Date", dates.len())];
    apply_or_warn(wizard, WizardEvent::SelectDate(date));

    for (i, slot) in TIME_SLOTS.iter().enumerate() {
        println!("{}. {}", i + 1, slot);
    }
    let slot = TIME_SLOTS[ask_for_choice("Time", TIME_SLOTS.len())];
    apply_or_warn(wizard, WizardEvent::SelectTime(slot.to_string()));
}

pub async fn handle(ctx: &Context, service: Option<String>) {
    let today = Local::now().date_naive();
    let session = ctx.session().await;

    let mut wizard = BookingWizard::load(session.api(), today)
        .await
        .unwrap_or_else(|e| fail(e));

    if wizard.services().is_empty() {
        fail("No services available.");
    }

    if let Some(identity) = session.identity() {
        wizard.prefill(identity);
    }

    if let Some(service) = service {
        if !wizard.preselect_service(&service) {
            eprintln!("Unknown service: {}", service);
        }
    }

    loop {
        let Some(step) = wizard.step() else {
            break;
        };

        println!();
        println!("===== Step {} of 3: {} =====", step.number(), step.title());

        match step {
            Step::ContactInfo => contact_step(&mut wizard),
            Step::ServiceDetails => service_step(&mut wizard),
            Step::Scheduling => schedule_step(&mut wizard, today),
        }

        if step != Step::Scheduling {
            apply_or_warn(&mut wizard, WizardEvent::Next);
            continue;
        }

        if !confirm("Confirm booking?") {
            if confirm("Go back to service details?") {
                apply_or_warn(&mut wizard, WizardEvent::Back);
            }
            continue;
        }

        match wizard.submit(&session).await {
            Ok(outcome) => {
                println!();
                println!("{}", outcome.confirmation);

                if let Some(prompt) = outcome.signup_prompt {
                    if let Some(prompt) = prompt.fired().await {
                        println!();
                        println!("Create an account to keep track of your bookings: `studio register`");
                        if let Some(id) = prompt.booking_id {
                            println!("Your booking reference is {}.", id);
                        }
                    }
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}
