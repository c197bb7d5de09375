/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Client-side state for the studio: session, booking wizard, password
//! reset, admin console and image helpers. All network access goes through
//! [`api::StudioApi`].

pub mod admin;
pub mod api;
pub mod error;
pub mod images;
pub mod password_reset;
pub mod portfolio;
pub mod pricing;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod wizard;

#[cfg(test)]
mod testing;

pub use api::{HttpApi, StudioApi};
pub use error::{FrontdeskError, ValidationError};
pub use session::{Role, Session};
pub use storage::{CredentialStore, MemoryStore};
