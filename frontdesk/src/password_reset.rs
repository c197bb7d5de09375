/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::StudioApi;
use crate::error::{FrontdeskError, ValidationError};
use crate::schedule::Cooldown;
use connector::auth::UserType;

pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const OTP_LENGTH: usize = 6;
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    ForgotPassword,
    ResetWithOtp,
}

/// Login form sub-flow: request a one-time code by email, then trade it
/// for a new password.
#[derive(Debug, Clone, Default)]
pub struct PasswordReset {
    mode: Mode,
    user_type: UserType,
    email: String,
    otp: String,
    new_password: String,
    cooldown: Cooldown,
}

impl PasswordReset {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    pub fn cooldown(&self) -> Cooldown {
        self.cooldown
    }

    pub fn can_resend(&self) -> bool {
        self.mode == Mode::ResetWithOtp && !self.cooldown.is_active()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_otp(&mut self, otp: impl Into<String>) {
        self.otp = otp.into();
    }

    pub fn set_new_password(&mut self, password: impl Into<String>) {
        self.new_password = password.into();
    }

    pub fn forgot_password(&mut self) -> Result<(), ValidationError> {
        if self.mode != Mode::Login {
            return Err(ValidationError::WrongMode);
        }

        self.mode = Mode::ForgotPassword;
        Ok(())
    }

    pub async fn request_otp<A: StudioApi>(&mut self, api: &A) -> Result<(), FrontdeskError> {
        if self.mode != Mode::ForgotPassword {
            return Err(ValidationError::WrongMode.into());
        }

        let email = self.checked_email()?;

        api.forgot_password(&email, self.user_type)
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to send OTP"))?;

        tracing::info!(%email, user_type = ?self.user_type, "password reset code requested");
        self.mode = Mode::ResetWithOtp;
        self.cooldown = Cooldown::start(RESEND_COOLDOWN_SECS);
        Ok(())
    }

    pub async fn resend<A: StudioApi>(&mut self, api: &A) -> Result<(), FrontdeskError> {
        if self.mode != Mode::ResetWithOtp {
            return Err(ValidationError::WrongMode.into());
        }

        if self.cooldown.is_active() {
            return Err(ValidationError::CooldownActive(self.cooldown.remaining()).into());
        }

        let email = self.checked_email()?;

        api.forgot_password(&email, self.user_type)
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to resend OTP"))?;

        tracing::debug!(%email, "password reset code re-sent");
        self.cooldown = Cooldown::start(RESEND_COOLDOWN_SECS);
        Ok(())
    }

    pub async fn reset<A: StudioApi>(&mut self, api: &A) -> Result<(), FrontdeskError> {
        if self.mode != Mode::ResetWithOtp {
            return Err(ValidationError::WrongMode.into());
        }

        let email = self.checked_email()?;
        let otp = self.otp.trim();

        if otp.chars().count() != OTP_LENGTH {
            return Err(ValidationError::InvalidOtp.into());
        }

        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort.into());
        }

        api.reset_password(&email, otp, &self.new_password, self.user_type)
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to reset password"))?;

        tracing::info!(%email, "password reset");
        self.back_to_login();
        Ok(())
    }

    pub fn tick(&mut self) {
        self.cooldown.tick();
    }

    pub fn advance(&mut self, seconds: u32) {
        self.cooldown.advance(seconds);
    }

    /// The email is kept so the login form can reuse it.
    pub fn back_to_login(&mut self) {
        self.mode = Mode::Login;
        self.otp.clear();
        self.new_password.clear();
        self.cooldown = Cooldown::default();
    }

    fn checked_email(&self) -> Result<String, ValidationError> {
        let email = self.email.trim();

        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        Ok(email.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStudioApi;
    use crate::testing::server_error;
    use connector::ConnectorError;

    #[tokio::test]
    async fn test_request_otp_starts_cooldown() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password()
            .withf(|email, user_type| email == "jane@x.com" && *user_type == UserType::User)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("jane@x.com");
        flow.request_otp(&api).await.unwrap();

        assert_eq!(flow.mode(), Mode::ResetWithOtp);
        assert_eq!(flow.cooldown().remaining(), RESEND_COOLDOWN_SECS);
        assert!(!flow.can_resend());

        flow.advance(59);
        assert!(!flow.can_resend());

        flow.tick();
        assert!(flow.can_resend());
    }

    #[tokio::test]
    async fn test_resend_blocked_during_cooldown() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password()
            .times(1)
            .returning(|_, _| Ok(()));

        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("jane@x.com");
        flow.request_otp(&api).await.unwrap();
        flow.advance(15);

        let err = flow.resend(&api).await.unwrap_err();
        assert!(matches!(
            err,
            FrontdeskError::Validation(ValidationError::CooldownActive(45))
        ));
    }

    #[tokio::test]
    async fn test_resend_after_expiry_restarts_cooldown() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password()
            .withf(|_, user_type| *user_type == UserType::Admin)
            .times(2)
            .returning(|_, _| Ok(()));

        let mut flow = PasswordReset::new(UserType::Admin);
        flow.forgot_password().unwrap();
        flow.set_email("admin@studio.com");
        flow.request_otp(&api).await.unwrap();

        flow.advance(RESEND_COOLDOWN_SECS);
        flow.resend(&api).await.unwrap();

        assert_eq!(flow.cooldown().remaining(), RESEND_COOLDOWN_SECS);
        assert_eq!(flow.mode(), Mode::ResetWithOtp);
    }

    #[tokio::test]
    async fn test_request_otp_requires_email() {
        let api = MockStudioApi::new();
        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("  ");

        let err = flow.request_otp(&api).await.unwrap_err();
        assert!(matches!(
            err,
            FrontdeskError::Validation(ValidationError::MissingEmail)
        ));
        assert_eq!(flow.mode(), Mode::ForgotPassword);
    }

    #[tokio::test]
    async fn test_unknown_email_keeps_mode() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password().times(1).returning(|_, _| {
            Err(ConnectorError::Api {
                status: 404,
                detail: Some("User not found".to_string()),
            })
        });

        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("nobody@x.com");

        let err = flow.request_otp(&api).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(flow.mode(), Mode::ForgotPassword);
        assert!(!flow.cooldown().is_active());
    }

    #[tokio::test]
    async fn test_reset_validates_before_request() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password()
            .times(1)
            .returning(|_, _| Ok(()));

        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("jane@x.com");
        flow.request_otp(&api).await.unwrap();

        flow.set_otp("12345");
        flow.set_new_password("secret1");
        assert!(matches!(
            flow.reset(&api).await,
            Err(FrontdeskError::Validation(ValidationError::InvalidOtp))
        ));

        flow.set_otp("123456");
        flow.set_new_password("abc");
        assert!(matches!(
            flow.reset(&api).await,
            Err(FrontdeskError::Validation(ValidationError::PasswordTooShort))
        ));
        assert_eq!(flow.mode(), Mode::ResetWithOtp);
    }

    #[tokio::test]
    async fn test_reset_returns_to_login() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password()
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_reset_password()
            .withf(|email, otp, password, user_type| {
                email == "jane@x.com"
                    && otp == "123456"
                    && password == "secret1"
                    && *user_type == UserType::User
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("jane@x.com");
        flow.request_otp(&api).await.unwrap();
        flow.set_otp(" 123456 ");
        flow.set_new_password("secret1");
        flow.reset(&api).await.unwrap();

        assert_eq!(flow.mode(), Mode::Login);
        assert!(flow.otp().is_empty());
        assert!(flow.new_password().is_empty());
        assert_eq!(flow.email(), "jane@x.com");
    }

    #[tokio::test]
    async fn test_reset_failure_keeps_fields() {
        let mut api = MockStudioApi::new();
        api.expect_forgot_password()
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_reset_password()
            .times(1)
            .returning(|_, _, _, _| Err(server_error()));

        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        flow.set_email("jane@x.com");
        flow.request_otp(&api).await.unwrap();
        flow.set_otp("123456");
        flow.set_new_password("secret1");

        let err = flow.reset(&api).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to reset password");
        assert_eq!(flow.mode(), Mode::ResetWithOtp);
        assert_eq!(flow.otp(), "123456");
    }

    #[test]
    fn test_mode_guards() {
        let mut flow = PasswordReset::new(UserType::User);
        flow.forgot_password().unwrap();
        assert_eq!(flow.forgot_password(), Err(ValidationError::WrongMode));

        flow.back_to_login();
        assert_eq!(flow.mode(), Mode::Login);
        assert!(!flow.can_resend());
    }
}
