/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin;
pub mod base;
pub mod booking;
pub mod catalog;
pub mod password;

use crate::config::{ConfigError, ConfigFile, ConfigKey, ConfigStore};
use frontdesk::{HttpApi, Session};
use std::fmt::Display;
use std::process::exit;

pub type StudioSession = Session<HttpApi, ConfigStore>;

pub fn fail(e: impl Display) -> ! {
    eprintln!("{}", e);
    exit(1);
}

/// Options shared by every subcommand.
#[derive(Clone, Debug)]
pub struct Context {
    pub config: ConfigFile,
    pub server: Option<String>,
}

impl Context {
    pub fn has_server(&self) -> bool {
        self.server.as_deref().is_some_and(|server| !server.is_empty())
            || matches!(self.config.get(ConfigKey::Server), Ok(Some(_)))
    }

    fn configured_server(&self) -> Result<Option<String>, ConfigError> {
        if let Some(server) = self.server.as_deref().filter(|server| !server.is_empty()) {
            return Ok(Some(server.to_string()));
        }

        self.config.get(ConfigKey::Server)
    }

    pub fn server_url(&self) -> String {
        match self.configured_server() {
            Ok(Some(server)) => server,
            Ok(None) => fail("Server URL is not set. Use `studio config server <url>` to set it."),
            Err(e) => fail(e),
        }
    }

    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.server_url())
    }

    pub fn store(&self) -> ConfigStore {
        ConfigStore::new(self.config.clone())
    }

    /// A session over the stored credential that is never checked with the
    /// server. Enough for logging out, and works without a server URL.
    pub fn local_session(&self) -> StudioSession {
        let server = self.configured_server().ok().flatten().unwrap_or_default();
        Session::new(HttpApi::new(server), self.store())
    }

    pub async fn session(&self) -> StudioSession {
        let mut session = Session::new(self.api(), self.store());
        session.bootstrap().await;
        session
    }

    pub async fn admin_session(&self) -> StudioSession {
        let session = self.session().await;

        if let Err(e) = session.require_admin() {
            fail(format!("{}. Use `studio login --admin` to log in.", e));
        }

        session
    }
}
