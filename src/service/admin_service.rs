use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument, warn};

use crate::dto::user_dto::UserResponse;
use crate::model::user::{VALID_ROLES, VALID_STATUSES};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait AdminService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserResponse>, ServiceError>;
    /// Deletes a user account. The caller can never delete their own account.
    async fn delete_user(
        &self,
        caller_id: &ObjectId,
        target_id: &ObjectId,
    ) -> Result<(), ServiceError>;
    async fn update_role(&self, id: &ObjectId, role: &str) -> Result<UserResponse, ServiceError>;
    async fn update_status(
        &self,
        id: &ObjectId,
        status: &str,
    ) -> Result<UserResponse, ServiceError>;
}

pub struct AdminServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl AdminServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl AdminService for AdminServiceImpl {
    async fn list_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.user_repo.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self), fields(caller = %caller_id, target = %target_id))]
    async fn delete_user(
        &self,
        caller_id: &ObjectId,
        target_id: &ObjectId,
    ) -> Result<(), ServiceError> {
        if caller_id == target_id {
            warn!("Admin attempted to delete their own account");
            return Err(ServiceError::InvalidInput(
                "You cannot delete your own account".to_string(),
            ));
        }

        self.user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        self.user_repo.delete(*target_id).await?;
        info!("User deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %id, role = %role))]
    async fn update_role(&self, id: &ObjectId, role: &str) -> Result<UserResponse, ServiceError> {
        if !VALID_ROLES.contains(&role) {
            return Err(ServiceError::InvalidInput(format!(
                "Role must be one of {:?}, got '{}'",
                VALID_ROLES, role
            )));
        }
        let updated = self.user_repo.set_role(*id, role).await?;
        info!("Role updated");
        Ok(UserResponse::from(updated))
    }

    #[instrument(skip(self), fields(user_id = %id, status = %status))]
    async fn update_status(
        &self,
        id: &ObjectId,
        status: &str,
    ) -> Result<UserResponse, ServiceError> {
        if !VALID_STATUSES.contains(&status) {
            return Err(ServiceError::InvalidInput(format!(
                "Status must be one of {:?}, got '{}'",
                VALID_STATUSES, status
            )));
        }
        let updated = self.user_repo.set_status(*id, status).await?;
        Ok(UserResponse::from(updated))
    }
}
