/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::StudioApi;
use crate::error::{FrontdeskError, ValidationError};
use crate::storage::CredentialStore;
use connector::auth::UserResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

/// Current identity, role and credential.
///
/// Constructed explicitly and handed to every view that needs it. `loading`
/// stays true from construction until [`Session::bootstrap`] has resolved the
/// persisted credential (or found none).
pub struct Session<A, S> {
    api: A,
    store: S,
    credential: Option<String>,
    identity: Option<UserResponse>,
    role: Role,
    loading: bool,
}

impl<A: StudioApi, S: CredentialStore> Session<A, S> {
    pub fn new(api: A, store: S) -> Self {
        let credential = store.load().filter(|credential| !credential.is_empty());

        Self {
            api,
            store,
            credential,
            identity: None,
            role: Role::Customer,
            loading: true,
        }
    }

    pub async fn bootstrap(&mut self) {
        let Some(credential) = self.credential.clone() else {
            self.loading = false;
            return;
        };

        match self.api.me(&credential).await {
            Ok(me) => {
                self.role = if me.is_admin() {
                    Role::Admin
                } else {
                    Role::Customer
                };
                self.identity = Some(me.user);
            }
            Err(e) => {
                // an expired credential is expected, not an error for the user
                tracing::debug!(error = %e, "stored credential rejected, clearing session");
                if let Err(e) = self.logout() {
                    tracing::warn!(error = %e, "could not clear rejected credential");
                }
            }
        }

        self.loading = false;
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), FrontdeskError> {
        require_fields(&[email, password])?;

        let res = self
            .api
            .login(email.trim(), password)
            .await
            .map_err(|e| FrontdeskError::api(e, "Invalid credentials"))?;

        self.establish(res.token, res.user, Role::Customer)
    }

    pub async fn admin_login(&mut self, email: &str, password: &str) -> Result<(), FrontdeskError> {
        require_fields(&[email, password])?;

        let res = self
            .api
            .admin_login(email.trim(), password)
            .await
            .map_err(|e| FrontdeskError::api(e, "Invalid credentials"))?;

        self.establish(res.token, res.admin, Role::Admin)
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), FrontdeskError> {
        require_fields(&[name, email, password])?;

        let res = self
            .api
            .register(name.trim(), email.trim(), password)
            .await
            .map_err(|e| FrontdeskError::api(e, "Registration failed"))?;

        self.establish(res.token, res.user, Role::Customer)
    }

    /// In-memory state is cleared even when the store fails.
    pub fn logout(&mut self) -> Result<(), FrontdeskError> {
        self.credential = None;
        self.identity = None;
        self.role = Role::Customer;
        self.store.clear().map_err(FrontdeskError::storage)
    }

    fn establish(
        &mut self,
        token: String,
        identity: UserResponse,
        role: Role,
    ) -> Result<(), FrontdeskError> {
        self.store.save(&token).map_err(FrontdeskError::storage)?;
        tracing::info!(email = %identity.email, ?role, "logged in");
        self.credential = Some(token);
        self.identity = Some(identity);
        self.role = role;
        Ok(())
    }

    pub fn require_admin(&self) -> Result<&str, FrontdeskError> {
        let credential = self.credential.as_deref().ok_or(FrontdeskError::NotLoggedIn)?;

        if !self.is_admin() {
            return Err(FrontdeskError::AdminRequired);
        }

        Ok(credential)
    }
}

impl<A, S> Session<A, S> {
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn identity(&self) -> Option<&UserResponse> {
        self.identity.as_ref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.identity.is_some() && self.role == Role::Admin
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

fn require_fields(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(())
}
