/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use clap::Subcommand;
use connector::auth::UserType;
use frontdesk::password_reset::{Mode, PasswordReset};
use tokio::time::Instant;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sends a one-time code by email and sets a new password with it.
    Forgot {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        admin: bool,
    },
}

/// Feeds wall clock seconds into the resend cooldown.
struct CooldownClock {
    since: Instant,
    counted: u64,
}

impl CooldownClock {
    fn start() -> Self {
        Self {
            since: Instant::now(),
            counted: 0,
        }
    }

    fn catch_up(&mut self, flow: &mut PasswordReset) {
        let elapsed = self.since.elapsed().as_secs();
        let delta = elapsed.saturating_sub(self.counted);
        flow.advance(u32::try_from(delta).unwrap_or(u32::MAX));
        self.counted = elapsed;
    }
}

pub async fn handle(ctx: &Context, cmd: Commands) {
    match cmd {
        Commands::Forgot { email, admin } => {
            let api = ctx.api();
            let user_type = if admin { UserType::Admin } else { UserType::User };
            let mut flow = PasswordReset::new(user_type);

            flow.forgot_password().unwrap_or_else(|e| fail(e));
            flow.set_email(or_ask(email, "Email"));
            flow.request_otp(&api).await.unwrap_or_else(|e| fail(e));

            println!("A 6 character code was sent to {}.", flow.email());
            let mut clock = CooldownClock::start();

            while flow.mode() == Mode::ResetWithOtp {
                let code = ask_for_input("Code (or `resend`)");
                clock.catch_up(&mut flow);

                if code.eq_ignore_ascii_case("resend") {
                    match flow.resend(&api).await {
                        Ok(()) => {
                            clock = CooldownClock::start();
                            println!("A new code was sent.");
                        }
                        Err(e) => eprintln!("{}", e),
                    }
                    continue;
                }

                flow.set_otp(code);
                flow.set_new_password(ask_for_password("New password"));

                match flow.reset(&api).await {
                    Ok(()) => println!("Password reset. You can now log in."),
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }
}
