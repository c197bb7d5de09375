/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::StudioApi;
use crate::error::FrontdeskError;
use connector::projects::ProjectResponse;

pub const ALL_WORK_TYPES: &str = "all";

/// Public portfolio listing with a work type filter.
#[derive(Debug, Clone)]
pub struct Portfolio {
    projects: Vec<ProjectResponse>,
    filter: String,
}

impl Portfolio {
    pub fn new(projects: Vec<ProjectResponse>) -> Self {
        Self {
            projects,
            filter: ALL_WORK_TYPES.to_string(),
        }
    }

    pub async fn load<A: StudioApi>(api: &A) -> Result<Self, FrontdeskError> {
        let projects = api
            .projects()
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to fetch projects"))?;

        Ok(Self::new(projects))
    }

    /// `all` followed by each distinct work type in first-seen order.
    pub fn work_types(&self) -> Vec<&str> {
        let mut types = vec![ALL_WORK_TYPES];

        for project in &self.projects {
            if !types.contains(&project.work_type.as_str()) {
                types.push(project.work_type.as_str());
            }
        }

        types
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns false and keeps the current filter for a type nobody uses.
    pub fn set_filter(&mut self, work_type: &str) -> bool {
        let known = self
            .work_types()
            .iter()
            .find(|known| known.eq_ignore_ascii_case(work_type.trim()))
            .map(|known| known.to_string());

        match known {
            Some(known) => {
                self.filter = known;
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> Vec<&ProjectResponse> {
        self.projects
            .iter()
            .filter(|project| self.filter == ALL_WORK_TYPES || project.work_type == self.filter)
            .collect()
    }
}
