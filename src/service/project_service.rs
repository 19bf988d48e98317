use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::project_dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use crate::model::project::Project;
use crate::repository::project_repo::ProjectRepository;
use crate::util::error::ServiceError;

/// Showcase CRUD. All write operations are admin-gated by the router; the
/// public surface is the list and detail reads.
#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn list(&self) -> Result<Vec<ProjectResponse>, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<ProjectResponse, ServiceError>;
    async fn create(
        &self,
        creator_id: ObjectId,
        request: CreateProjectRequest,
    ) -> Result<ProjectResponse, ServiceError>;
    async fn update(
        &self,
        id: ObjectId,
        request: UpdateProjectRequest,
    ) -> Result<ProjectResponse, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn toggle_feature(&self, id: ObjectId) -> Result<ProjectResponse, ServiceError>;
}

pub struct ProjectServiceImpl {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectServiceImpl {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        Self { project_repo }
    }
}

#[async_trait]
impl ProjectService for ProjectServiceImpl {
    async fn list(&self) -> Result<Vec<ProjectResponse>, ServiceError> {
        let projects = self.project_repo.list().await?;
        Ok(projects.into_iter().map(ProjectResponse::from).collect())
    }

    async fn get(&self, id: ObjectId) -> Result<ProjectResponse, ServiceError> {
        let project = self.project_repo.get_by_id(id).await?;
        Ok(ProjectResponse::from(project))
    }

    #[instrument(skip(self, request), fields(creator = %creator_id, title = %request.title))]
    async fn create(
        &self,
        creator_id: ObjectId,
        request: CreateProjectRequest,
    ) -> Result<ProjectResponse, ServiceError> {
        let now = bson::DateTime::now();
        let project = Project {
            id: None,
            title: request.title,
            description: request.description,
            tech_stack: request.tech_stack,
            prototype_url: request.prototype_url,
            image: request.image,
            featured: request.featured,
            creator: creator_id,
            created_at: now,
            updated_at: now,
        };
        let inserted = self.project_repo.insert(project).await?;
        info!("Project created");
        Ok(ProjectResponse::from(inserted))
    }

    #[instrument(skip(self, request), fields(project = %id))]
    async fn update(
        &self,
        id: ObjectId,
        request: UpdateProjectRequest,
    ) -> Result<ProjectResponse, ServiceError> {
        let mut project = self.project_repo.get_by_id(id).await?;

        if let Some(title) = request.title {
            project.title = title;
        }
        if let Some(description) = request.description {
            project.description = description;
        }
        if let Some(tech_stack) = request.tech_stack {
            project.tech_stack = tech_stack;
        }
        if let Some(prototype_url) = request.prototype_url {
            project.prototype_url = Some(prototype_url);
        }
        if let Some(image) = request.image {
            project.image = Some(image);
        }
        if let Some(featured) = request.featured {
            project.featured = featured;
        }
        project.updated_at = bson::DateTime::now();

        let updated = self.project_repo.update(id, project).await?;
        Ok(ProjectResponse::from(updated))
    }

    #[instrument(skip(self), fields(project = %id))]
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.project_repo.get_by_id(id).await?;
        self.project_repo.delete(id).await?;
        info!("Project deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(project = %id))]
    async fn toggle_feature(&self, id: ObjectId) -> Result<ProjectResponse, ServiceError> {
        let project = self.project_repo.get_by_id(id).await?;
        let updated = self
            .project_repo
            .set_featured(id, !project.featured)
            .await?;
        info!(featured = updated.featured, "Featured flag toggled");
        Ok(ProjectResponse::from(updated))
    }
}
