/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::StudioApi;
use crate::error::{FrontdeskError, ValidationError};
use crate::session::Session;
use crate::storage::CredentialStore;
use connector::projects::{MakeProjectRequest, ProjectResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub work_type: String,
    pub image_url: String,
    pub featured: bool,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            work_type: String::new(),
            image_url: String::new(),
            featured: true,
        }
    }
}

impl From<&ProjectResponse> for ProjectForm {
    fn from(project: &ProjectResponse) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            work_type: project.work_type.clone(),
            image_url: project.image_url.clone().unwrap_or_default(),
            featured: project.featured,
        }
    }
}

impl ProjectForm {
    pub fn request(&self) -> Result<MakeProjectRequest, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingProjectName);
        }

        Ok(MakeProjectRequest {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            work_type: self.work_type.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            featured: self.featured,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Portfolio administration. Create and update share one form; `editing`
/// holds the id of the project loaded into it, if any.
#[derive(Debug, Clone, Default)]
pub struct ProjectsView {
    projects: Vec<ProjectResponse>,
    editing: Option<String>,
    form: ProjectForm,
    form_open: bool,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[ProjectResponse] {
        &self.projects
    }

    pub fn find(&self, id: &str) -> Option<&ProjectResponse> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub async fn refresh<A: StudioApi, S>(
        &mut self,
        session: &Session<A, S>,
    ) -> Result<(), FrontdeskError> {
        self.projects = session
            .api()
            .projects()
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to fetch projects"))?;

        tracing::debug!(count = self.projects.len(), "fetched projects");
        Ok(())
    }

    pub fn start_create(&mut self) {
        self.reset_form();
        self.form_open = true;
    }

    pub fn edit(&mut self, id: &str) -> Result<(), ValidationError> {
        let project = self
            .find(id)
            .ok_or_else(|| ValidationError::UnknownProject(id.to_string()))?;

        self.form = ProjectForm::from(project);
        self.editing = Some(id.to_string());
        self.form_open = true;
        Ok(())
    }

    pub fn reset_form(&mut self) {
        self.editing = None;
        self.form = ProjectForm::default();
        self.form_open = false;
    }

    pub async fn save<A: StudioApi, S: CredentialStore>(
        &mut self,
        session: &Session<A, S>,
    ) -> Result<SaveOutcome, FrontdeskError> {
        let credential = session.require_admin()?;
        let request = self.form.request()?;

        let outcome = match &self.editing {
            Some(id) => {
                session
                    .api()
                    .update_project(credential, id, &request)
                    .await
                    .map_err(|e| FrontdeskError::api(e, "Failed to save project"))?;
                SaveOutcome::Updated
            }
            None => {
                session
                    .api()
                    .create_project(credential, &request)
                    .await
                    .map_err(|e| FrontdeskError::api(e, "Failed to save project"))?;
                SaveOutcome::Created
            }
        };

        tracing::info!(name = %request.name, ?outcome, "project saved");
        self.reset_form();
        self.refresh(session).await?;
        Ok(outcome)
    }

    /// Asks `confirm` before anything is sent. Returns whether the project
    /// was deleted.
    pub async fn delete<A, S, F>(
        &mut self,
        session: &Session<A, S>,
        id: &str,
        confirm: F,
    ) -> Result<bool, FrontdeskError>
    where
        A: StudioApi,
        S: CredentialStore,
        F: FnOnce(&ProjectResponse) -> bool,
    {
        let credential = session.require_admin()?;
        let project = self
            .find(id)
            .ok_or_else(|| ValidationError::UnknownProject(id.to_string()))?;

        if !confirm(project) {
            return Ok(false);
        }

        session
            .api()
            .delete_project(credential, id)
            .await
            .map_err(|e| FrontdeskError::api(e, "Failed to delete project"))?;

        tracing::info!(project = id, "project deleted");
        self.refresh(session).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockStudioApi;
    use crate::testing::*;
    use mockall::Sequence;

    #[test]
    fn test_new_form_is_featured() {
        let mut view = ProjectsView::new();
        view.start_create();

        assert!(view.is_form_open());
        assert!(view.form().featured);
        assert_eq!(view.editing(), None);
    }

    #[test]
    fn test_edit_loads_record() {
        let mut view = ProjectsView {
            projects: vec![project("p1", "Monsoon Nights", "Film Score")],
            ..ProjectsView::default()
        };

        view.edit("p1").unwrap();
        assert_eq!(view.editing(), Some("p1"));
        assert_eq!(view.form().work_type, "Film Score");
        assert_eq!(view.form().image_url, "");

        assert_eq!(
            view.edit("p2"),
            Err(ValidationError::UnknownProject("p2".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_then_refetch() {
        let mut api = MockStudioApi::new();
        let mut seq = Sequence::new();

        api.expect_create_project()
            .withf(|credential, project| {
                credential == "tok-admin" && project.name == "Monsoon Nights" && project.featured
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        api.expect_projects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![project("p1", "Monsoon Nights", "Film Score")]));

        let session = admin_session(api).await;
        let mut view = ProjectsView::new();
        view.start_create();
        view.form_mut().name = " Monsoon Nights ".to_string();
        view.form_mut().work_type = "Film Score".to_string();

        assert_eq!(view.save(&session).await.unwrap(), SaveOutcome::Created);
        assert!(!view.is_form_open());
        assert_eq!(view.projects().len(), 1);
    }

    #[tokio::test]
    async fn test_update_uses_edited_id() {
        let mut api = MockStudioApi::new();
        api.expect_projects()
            .times(2)
            .returning(|| Ok(vec![project("p1", "Monsoon Nights", "Film Score")]));
        api.expect_update_project()
            .withf(|_, id, project| id == "p1" && !project.featured)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let session = admin_session(api).await;
        let mut view = ProjectsView::new();
        view.refresh(&session).await.unwrap();
        view.edit("p1").unwrap();
        view.form_mut().featured = false;

        assert_eq!(view.save(&session).await.unwrap(), SaveOutcome::Updated);
        assert_eq!(view.editing(), None);
    }

    #[tokio::test]
    async fn test_save_requires_name() {
        let session = admin_session(MockStudioApi::new()).await;
        let mut view = ProjectsView::new();
        view.start_create();

        assert!(matches!(
            view.save(&session).await,
            Err(FrontdeskError::Validation(ValidationError::MissingProjectName))
        ));
        assert!(view.is_form_open());
    }

    #[tokio::test]
    async fn test_delete_declined_sends_nothing() {
        let mut api = MockStudioApi::new();
        api.expect_projects()
            .times(1)
            .returning(|| Ok(vec![project("p1", "Monsoon Nights", "Film Score")]));

        let session = admin_session(api).await;
        let mut view = ProjectsView::new();
        view.refresh(&session).await.unwrap();

        let deleted = view
            .delete(&session, "p1", |project| {
                assert_eq!(project.name, "Monsoon Nights");
                false
            })
            .await
            .unwrap();

        assert!(!deleted);
        assert_eq!(view.projects().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_confirmed_refetches() {
        let mut api = MockStudioApi::new();
        let mut seq = Sequence::new();

        api.expect_projects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![project("p1", "Monsoon Nights", "Film Score")]));
        api.expect_delete_project()
            .withf(|_, id| id == "p1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        api.expect_projects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(Vec::new()));

        let session = admin_session(api).await;
        let mut view = ProjectsView::new();
        view.refresh(&session).await.unwrap();

        assert!(view.delete(&session, "p1", |_| true).await.unwrap());
        assert!(view.projects().is_empty());
    }
}
