/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::convert::Infallible;

/// Persistence for the single bearer credential. Nothing else about the
/// session is ever stored; identity is always re-derived from the server.
pub trait CredentialStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Option<String>;
    fn save(&mut self, credential: &str) -> Result<(), Self::Error>;
    fn clear(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            value: Some(credential.into()),
        }
    }
}

impl CredentialStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Option<String> {
        self.value.clone().filter(|value| !value.is_empty())
    }

    fn save(&mut self, credential: &str) -> Result<(), Self::Error> {
        self.value = Some(credential.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.value = None;
        Ok(())
    }
}
