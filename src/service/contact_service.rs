use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::contact_dto::{ContactMessageResponse, ContactRequest};
use crate::model::contact_message::ContactMessage;
use crate::repository::contact_repo::ContactRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContactService: Send + Sync {
    /// Guest submission from the public contact form.
    async fn submit(&self, request: ContactRequest) -> Result<ContactMessageResponse, ServiceError>;
    async fn list(&self) -> Result<Vec<ContactMessageResponse>, ServiceError>;
    async fn toggle_responded(&self, id: ObjectId) -> Result<ContactMessageResponse, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct ContactServiceImpl {
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit(
        &self,
        request: ContactRequest,
    ) -> Result<ContactMessageResponse, ServiceError> {
        let message = ContactMessage {
            id: None,
            name: request.name,
            email: request.email,
            message: request.message,
            is_responded: false,
            created_at: None,
        };
        let inserted = self.contact_repo.insert(message).await?;
        info!("Contact message received");
        Ok(ContactMessageResponse::from(inserted))
    }

    async fn list(&self) -> Result<Vec<ContactMessageResponse>, ServiceError> {
        let messages = self.contact_repo.list().await?;
        Ok(messages
            .into_iter()
            .map(ContactMessageResponse::from)
            .collect())
    }

    #[instrument(skip(self), fields(message = %id))]
    async fn toggle_responded(
        &self,
        id: ObjectId,
    ) -> Result<ContactMessageResponse, ServiceError> {
        let message = self.contact_repo.get_by_id(id).await?;
        let updated = self
            .contact_repo
            .set_responded(id, !message.is_responded)
            .await?;
        Ok(ContactMessageResponse::from(updated))
    }

    #[instrument(skip(self), fields(message = %id))]
    async fn delete(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.contact_repo.delete(id).await?;
        info!("Contact message deleted");
        Ok(())
    }
}
