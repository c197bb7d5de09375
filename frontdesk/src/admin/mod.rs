/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Admin console views. Every mutating call needs an admin session.

mod bookings;
mod overview;
mod projects;

pub use bookings::{BadgeTone, BookingsView, StatusBadge, StatusFilter};
pub use overview::{Overview, RECENT_BOOKINGS, StatCard};
pub use projects::{ProjectForm, ProjectsView, SaveOutcome};
