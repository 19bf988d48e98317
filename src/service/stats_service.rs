use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::dto::stats_dto::DashboardStats;
use crate::repository::contact_repo::ContactRepository;
use crate::repository::post_repo::PostRepository;
use crate::repository::project_repo::ProjectRepository;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait StatsService: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardStats, ServiceError>;
}

pub struct StatsServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl StatsServiceImpl {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        contact_repo: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            project_repo,
            contact_repo,
        }
    }
}

#[async_trait]
impl StatsService for StatsServiceImpl {
    #[instrument(skip(self))]
    async fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
        // Independent counts, fetched concurrently.
        let (users, posts, projects, contact_messages, unresponded_messages, comments) =
            futures::try_join!(
                self.user_repo.count(),
                self.post_repo.count(),
                self.project_repo.count(),
                self.contact_repo.count(),
                self.contact_repo.count_unresponded(),
                self.post_repo.total_comment_count(),
            )?;

        Ok(DashboardStats {
            users,
            posts,
            projects,
            contact_messages,
            unresponded_messages,
            comments,
        })
    }
}
