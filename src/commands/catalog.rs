/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use frontdesk::StudioApi;
use frontdesk::images::{ImageKind, resolve_image_url};
use frontdesk::portfolio::Portfolio;
use frontdesk::pricing::{price_label, requires_hours};

pub async fn handle_services(ctx: &Context) {
    let services = ctx
        .api()
        .services()
        .await
        .unwrap_or_else(|e| fail(e.user_message("Failed to load services")));

    if services.is_empty() {
        println!("No services available.");
        return;
    }

    for service in services {
        let billing = if requires_hours(&service) {
            " (per hour)"
        } else {
            ""
        };

        println!("{}: {}{}", service.name, price_label(&service), billing);
        if let Some(description) = service.description.filter(|d| !d.is_empty()) {
            println!("    {}", description);
        }
    }
}

pub async fn handle_portfolio(ctx: &Context, work_type: Option<String>) {
    let server = ctx.server_url();
    let mut portfolio = Portfolio::load(&ctx.api())
        .await
        .unwrap_or_else(|e| fail(e));

    if let Some(work_type) = work_type {
        if !portfolio.set_filter(&work_type) {
            fail(format!(
                "Unknown work type: {}. Available: {}",
                work_type,
                portfolio.work_types().join(", ")
            ));
        }
    }

    let visible = portfolio.visible();
    if visible.is_empty() {
        println!("No projects found.");
        return;
    }

    for project in visible {
        let marker = if project.featured { "*" } else { " " };
        println!("{} {} [{}]", marker, project.name, project.work_type);

        if !project.description.is_empty() {
            println!("    {}", project.description);
        }

        println!(
            "    {}",
            resolve_image_url(project.image_url.as_deref(), ImageKind::Project, &server)
        );
    }
}
