/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use clap::Subcommand;
use connector::bookings::{BookingResponse, BookingStatus};
use frontdesk::admin::{
    BookingsView, Overview, ProjectForm, ProjectsView, SaveOutcome, StatusBadge, StatusFilter,
};
use frontdesk::images::{ImageKind, resolve_image_url};

#[derive(Subcommand, Debug)]
pub enum Commands {
    Overview,
    Bookings {
        #[command(subcommand)]
        cmd: BookingCommands,
    },
    Projects {
        #[command(subcommand)]
        cmd: ProjectCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    List {
        /// Matches name, email or service.
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short = 't', long, default_value = "all")]
        status: StatusFilter,
    },
    Status {
        id: String,
        status: BookingStatus,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    List,
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        work_type: Option<String>,
        #[arg(short, long)]
        image_url: Option<String>,
        #[arg(short, long)]
        featured: Option<bool>,
    },
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short = 'c', long)]
        description: Option<String>,
        #[arg(short, long)]
        work_type: Option<String>,
        #[arg(short, long)]
        image_url: Option<String>,
        #[arg(short, long)]
        featured: Option<bool>,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

struct FormFields {
    name: Option<String>,
    description: Option<String>,
    work_type: Option<String>,
    image_url: Option<String>,
    featured: Option<bool>,
}

impl FormFields {
    fn apply(self, form: &mut ProjectForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(work_type) = self.work_type {
            form.work_type = work_type;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        if let Some(featured) = self.featured {
            form.featured = featured;
        }
    }
}

fn print_booking(booking: &BookingResponse) {
    let hours = booking
        .hours
        .map(|hours| format!(", {} hour(s)", hours))
        .unwrap_or_default();

    println!(
        "{}  {} <{}>  {}  {} {}{}  [{}]",
        booking.id,
        booking.full_name,
        booking.email,
        booking.service_name,
        booking.preferred_date,
        booking.preferred_time,
        hours,
        StatusBadge::new(&booking.status)
    );
}

fn saved_message(outcome: SaveOutcome) -> &'static str {
    match outcome {
        SaveOutcome::Created => "Project created",
        SaveOutcome::Updated => "Project updated",
    }
}

pub async fn handle(ctx: &Context, cmd: Commands) {
    let session = ctx.admin_session().await;

    match cmd {
        Commands::Overview => {
            let overview = Overview::load(&session).await.unwrap_or_else(|e| fail(e));

            println!("===== Dashboard =====");
            for card in overview.cards() {
                println!("{}: {}", card.label, card.value);
            }

            println!();
            println!("===== Recent Bookings =====");
            if overview.recent.is_empty() {
                println!("No bookings yet.");
            }
            for booking in &overview.recent {
                print_booking(booking);
            }
        }

        Commands::Bookings { cmd } => {
            let mut view = BookingsView::new();

            match cmd {
                BookingCommands::List { search, status } => {
                    view.refresh(&session).await.unwrap_or_else(|e| fail(e));
                    view.set_search(search.unwrap_or_default());
                    view.set_filter(status);

                    let visible = view.visible();
                    if visible.is_empty() {
                        println!("No bookings found.");
                    }
                    for booking in visible {
                        print_booking(booking);
                    }
                }

                BookingCommands::Status { id, status } => {
                    view.update_status(&session, &id, status)
                        .await
                        .unwrap_or_else(|e| fail(e));

                    println!("Status updated");
                    if let Some(booking) = view.find(&id) {
                        print_booking(booking);
                    }
                }
            }
        }

        Commands::Projects { cmd } => {
            let server = ctx.server_url();
            let mut view = ProjectsView::new();
            view.refresh(&session).await.unwrap_or_else(|e| fail(e));

            match cmd {
                ProjectCommands::List => {
                    if view.projects().is_empty() {
                        println!("No projects yet.");
                    }

                    for project in view.projects() {
                        let featured = if project.featured { " (featured)" } else { "" };
                        println!("{}  {} [{}]{}", project.id, project.name, project.work_type, featured);
                        println!(
                            "    {}",
                            resolve_image_url(project.image_url.as_deref(), ImageKind::Project, &server)
                        );
                    }
                }

                ProjectCommands::Create {
                    name,
                    description,
                    work_type,
                    image_url,
                    featured,
                } => {
                    view.start_create();
                    FormFields {
                        name: Some(or_ask(name, "Name")),
                        description,
                        work_type,
                        image_url,
                        featured,
                    }
                    .apply(view.form_mut());

                    let outcome = view.save(&session).await.unwrap_or_else(|e| fail(e));
                    println!("{}", saved_message(outcome));
                }

                ProjectCommands::Edit {
                    id,
                    name,
                    description,
                    work_type,
                    image_url,
                    featured,
                } => {
                    view.edit(&id).unwrap_or_else(|e| fail(e));
                    FormFields {
                        name,
                        description,
                        work_type,
                        image_url,
                        featured,
                    }
                    .apply(view.form_mut());

                    let outcome = view.save(&session).await.unwrap_or_else(|e| fail(e));
                    println!("{}", saved_message(outcome));
                }

                ProjectCommands::Delete { id, yes } => {
                    let deleted = view
                        .delete(&session, &id, |project| {
                            yes || confirm(&format!("Delete project \"{}\"?", project.name))
                        })
                        .await
                        .unwrap_or_else(|e| fail(e));

                    if deleted {
                        println!("Project deleted");
                    } else {
                        println!("Cancelled.");
                    }
                }
            }
        }
    }
}
