//! The `gpcore_project` resource.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tonic::Code;
use tracing::{debug, info, warn};

use super::{known_string, ClientSlot, Resource};
use crate::cloud::v1::{
    CreateProjectRequest, DeleteProjectRequest, GetProjectRequest, Project, ProjectEnvironment,
    UpdateProjectRequest,
};
use crate::cloud::CloudApi;
use crate::error::ProviderError;
use crate::schema::{Attribute, Diagnostic, Schema};
use crate::types::{AttrValue, StateResponse};
use crate::validator::EnumValidator;

/// State of a `gpcore_project`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ProjectModel {
    pub id: AttrValue<String>,
    pub name: AttrValue<String>,
    pub description: AttrValue<String>,
    /// A `ProjectEnvironment` name such as `PROJECT_ENVIRONMENT_PRODUCTION`.
    pub environment: AttrValue<String>,
}

impl ProjectModel {
    fn environment(&self) -> Result<ProjectEnvironment, ProviderError> {
        let environment = known_string(&self.environment, "environment")?;
        ProjectEnvironment::from_str_name(&environment)
            .filter(|parsed| *parsed != ProjectEnvironment::Unspecified)
            .ok_or_else(|| {
                ProviderError::Validation(format!(
                    "Invalid project environment specified: {}",
                    environment
                ))
            })
    }

    fn write(&mut self, project: &Project) {
        self.id = AttrValue::Known(project.id.clone());
        self.name = AttrValue::Known(project.name.clone());
        // The API reports a missing description as an empty string.
        if !(project.description.is_empty() && self.description.is_null()) {
            self.description = AttrValue::Known(project.description.clone());
        }
        self.environment = AttrValue::Known(project.environment().as_str_name().to_string());
    }

    fn known_id(&self) -> Result<String, ProviderError> {
        self.id
            .as_known()
            .cloned()
            .ok_or_else(|| ProviderError::InvalidState("Project ID is missing from the state".to_string()))
    }
}

fn missing_project(action: &str) -> ProviderError {
    ProviderError::Client(format!(
        "Unable to {}, got error: the response contained no project",
        action
    ))
}

/// Handler for `gpcore_project`.
#[derive(Debug, Default)]
pub struct ProjectResource {
    client: ClientSlot,
}

impl ProjectResource {
    /// Create an unconfigured handler.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Resource for ProjectResource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_project", provider_type_name)
    }

    fn schema(&self) -> Schema {
        Schema::v0()
            .with_description("A project groups nodes and other resources.")
            .with_attribute(
                "name",
                Attribute::required_string().with_description("Project Name"),
            )
            .with_attribute(
                "description",
                Attribute::optional_string().with_description("Project Description"),
            )
            .with_attribute(
                "environment",
                Attribute::required_string()
                    .with_description("Project Environment")
                    .with_validator(EnumValidator::project_environment()),
            )
            .with_attribute(
                "id",
                Attribute::computed_string()
                    .with_description("Project ID")
                    .with_use_state_for_unknown(),
            )
    }

    fn configure(&self, client: Arc<dyn CloudApi>) {
        self.client.set(client);
    }

    async fn create(&self, planned: Value) -> Result<StateResponse, ProviderError> {
        let client = self.client.get()?;
        let mut model: ProjectModel = serde_json::from_value(planned)?;

        let request = CreateProjectRequest {
            name: known_string(&model.name, "name")?,
            description: model.description.value_or_default(),
            environment: model.environment()? as i32,
        };
        debug!(name = %request.name, "creating project");
        let response = client
            .create_project(request)
            .await
            .map_err(|status| ProviderError::remote("create project", status))?;
        let project = response
            .project
            .ok_or_else(|| missing_project("create project"))?;
        model.write(&project);
        info!(project_id = %project.id, "created project");
        Ok(StateResponse::new(serde_json::to_value(&model)?))
    }

    async fn read(&self, current: Value) -> Result<StateResponse, ProviderError> {
        let client = self.client.get()?;
        let mut model: ProjectModel = serde_json::from_value(current)?;
        let id = model.known_id()?;

        match client.get_project(GetProjectRequest { id: id.clone() }).await {
            Ok(response) => {
                let project = response.project.ok_or_else(|| missing_project("get project"))?;
                model.write(&project);
                Ok(StateResponse::new(serde_json::to_value(&model)?))
            },
            Err(status) if status.code() == Code::NotFound => {
                warn!(project_id = %id, "project not found, removing from state");
                Ok(StateResponse::removed().with_diagnostic(
                    Diagnostic::warning("Project not found").with_detail(format!(
                        "Project with ID {} not found. It has been removed from the state.",
                        id
                    )),
                ))
            },
            Err(status) => Err(ProviderError::remote("get project", status)),
        }
    }

    async fn update(&self, prior: Value, planned: Value) -> Result<StateResponse, ProviderError> {
        let client = self.client.get()?;
        let prior: ProjectModel = serde_json::from_value(prior)?;
        let mut model: ProjectModel = serde_json::from_value(planned)?;
        let id = model.known_id().or_else(|_| prior.known_id())?;

        let request = UpdateProjectRequest {
            id: id.clone(),
            name: known_string(&model.name, "name")?,
            description: model.description.as_known().cloned(),
            environment: model.environment()? as i32,
        };
        debug!(project_id = %id, "updating project");
        let response = client
            .update_project(request)
            .await
            .map_err(|status| ProviderError::remote("update project", status))?;
        let project = response
            .project
            .ok_or_else(|| missing_project("update project"))?;
        model.write(&project);
        Ok(StateResponse::new(serde_json::to_value(&model)?))
    }

    async fn delete(&self, current: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let client = self.client.get()?;
        let model: ProjectModel = serde_json::from_value(current)?;
        let id = model.known_id()?;

        match client
            .delete_project(DeleteProjectRequest { id: id.clone() })
            .await
        {
            Ok(_) => {
                info!(project_id = %id, "deleted project");
                Ok(Vec::new())
            },
            Err(status) if status.code() == Code::NotFound => {
                Ok(vec![Diagnostic::warning("Client Warning").with_detail(format!(
                    "Project that should be deleted does not exist: {}",
                    status.message()
                ))])
            },
            Err(status) => Err(ProviderError::remote("delete project", status)),
        }
    }

    fn import_state(&self, id: &str) -> Result<Value, ProviderError> {
        if id.is_empty() {
            return Err(ProviderError::InvalidImportId(
                "Expected import ID format: project_id".to_string(),
            ));
        }
        let model = ProjectModel {
            id: AttrValue::Known(id.to_string()),
            ..Default::default()
        };
        Ok(serde_json::to_value(&model)?)
    }
}
