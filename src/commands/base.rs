/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::config::*;
use crate::input::*;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use frontdesk::Role;
use std::io;
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Studio", display_name = "Studio", bin_name = "studio", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
    /// Overrides the configured server for this invocation.
    #[arg(long, global = true, env = "STUDIO_SERVER_URL")]
    server: Option<String>,
    #[arg(long, global = true, env = "STUDIO_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Register {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        admin: bool,
    },
    Logout,
    Info,
    Password {
        #[command(subcommand)]
        cmd: password::Commands,
    },
    Services,
    Book {
        /// Service to preselect, by name.
        #[arg(short, long)]
        service: Option<String>,
    },
    Portfolio {
        #[arg(short, long)]
        work_type: Option<String>,
    },
    Admin {
        #[command(subcommand)]
        cmd: admin::Commands,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    init_logging(&cli.log_level);

    let Some(cmd) = cli.cmd else {
        let _ = Cli::command().print_help();
        exit(1);
    };

    let ctx = Context {
        config: ConfigFile::locate().unwrap_or_else(|e| fail(e)),
        server: cli.server,
    };

    match cmd {
        MainCommands::Config { key, value } => {
            match ctx.config.set_get_value_from_string(&key, value, false) {
                Ok(_) => {}
                // the valid keys were already listed
                Err(ConfigError::InvalidKey(_)) => exit(1),
                Err(e) => fail(e),
            }
        }

        MainCommands::Status => {
            println!("Server: {}", ctx.server_url());

            let session = ctx.session().await;
            match session.identity() {
                Some(identity) if session.role() == Role::Admin => {
                    println!("Logged in as {} <{}> (admin)", identity.name, identity.email)
                }
                Some(identity) => println!("Logged in as {} <{}>", identity.name, identity.email),
                None => println!("Not logged in. Use `studio login` to log in."),
            }
        }

        MainCommands::Register { name, email } => {
            let name = or_ask(name, "Name");
            let email = or_ask(email, "Email");
            let password = ask_for_password("Password");

            let mut session = ctx.session().await;
            session
                .register(&name, &email, &password)
                .await
                .unwrap_or_else(|e| fail(e));

            println!("Account created. Welcome, {}!", name);
        }

        MainCommands::Login { email, admin } => {
            if !ctx.has_server() {
                let server = ask_for_input("Server URL");
                ctx.config
                    .set(ConfigKey::Server, Some(server))
                    .unwrap_or_else(|e| fail(e));
            }

            let email = or_ask(email, "Email");
            let password = ask_for_password("Password");

            let mut session = ctx.session().await;
            let res = if admin {
                session.admin_login(&email, &password).await
            } else {
                session.login(&email, &password).await
            };
            res.unwrap_or_else(|e| fail(e));

            println!("Welcome back!");
        }

        MainCommands::Logout => {
            ctx.local_session().logout().unwrap_or_else(|e| fail(e));
            println!("Logged out.");
        }

        MainCommands::Info => {
            let session = ctx.session().await;
            let Some(identity) = session.identity() else {
                fail("Not logged in. Use `studio login` to log in.");
            };

            println!("User ID: {}", identity.id);
            println!("Name: {}", identity.name);
            println!("Email: {}", identity.email);
            if let Some(phone) = &identity.phone {
                println!("Phone: {}", phone);
            }
            println!("Role: {:?}", session.role());
        }

        MainCommands::Password { cmd } => password::handle(&ctx, cmd).await,
        MainCommands::Services => catalog::handle_services(&ctx).await,
        MainCommands::Book { service } => booking::handle(&ctx, service).await,
        MainCommands::Portfolio { work_type } => catalog::handle_portfolio(&ctx, work_type).await,
        MainCommands::Admin { cmd } => admin::handle(&ctx, cmd).await,
    }

    exit(0);
}
