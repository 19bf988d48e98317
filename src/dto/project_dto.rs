use crate::model::project::Project;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[validate(url)]
    pub prototype_url: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    #[validate(url)]
    pub prototype_url: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub prototype_url: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub creator: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse {
            id: super::format_id(project.id),
            title: project.title,
            description: project.description,
            tech_stack: project.tech_stack,
            prototype_url: project.prototype_url,
            image: project.image,
            featured: project.featured,
            creator: project.creator.to_hex(),
            created_at: super::format_datetime(project.created_at),
            updated_at: super::format_datetime(project.updated_at),
        }
    }
}
