use crate::model::contact_message::ContactMessage;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::Utc;
use futures::stream::StreamExt;
use mongodb::{options::FindOptions, Database};
use tracing::error;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: ContactMessage) -> RepositoryResult<ContactMessage>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactMessage>;
    /// Newest messages first.
    async fn list(&self) -> RepositoryResult<Vec<ContactMessage>>;
    async fn set_responded(&self, id: ObjectId, responded: bool) -> RepositoryResult<ContactMessage>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<u64>;
    async fn count_unresponded(&self) -> RepositoryResult<u64>;
}

pub struct MongoContactRepository {
    collection: mongodb::Collection<ContactMessage>,
}

impl MongoContactRepository {
    pub fn new(db: &Database) -> Self {
        MongoContactRepository {
            collection: db.collection::<ContactMessage>("contact_messages"),
        }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn insert(&self, mut message: ContactMessage) -> RepositoryResult<ContactMessage> {
        message.id = Some(ObjectId::new());
        message.is_responded = false;
        message.created_at = Some(Utc::now().to_rfc3339());
        match self.collection.insert_one(message.clone(), None).await {
            Ok(_) => Ok(message),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to save contact message: {}",
                e
            ))),
        }
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactMessage> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(message)) => Ok(message),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Contact message not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch contact message: {}",
                e
            ))),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<ContactMessage>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list messages: {}", e)))?;
        let mut cursor = cursor;
        let mut messages = Vec::new();
        while let Some(message) = cursor.next().await {
            match message {
                Ok(m) => messages.push(m),
                Err(e) => {
                    error!("Failed to deserialize contact message: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize contact message: {}",
                        e
                    )));
                }
            }
        }
        Ok(messages)
    }

    async fn set_responded(
        &self,
        id: ObjectId,
        responded: bool,
    ) -> RepositoryResult<ContactMessage> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "is_responded": responded } };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Contact message not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update contact message: {}",
                e
            ))),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        let result = self.collection.delete_one(filter, None).await;
        match result {
            Ok(delete_result) if delete_result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Contact message not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to delete contact message: {}",
                e
            ))),
        }
    }

    async fn count(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count messages: {}", e)))
    }

    async fn count_unresponded(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(doc! { "is_responded": false }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count messages: {}", e)))
    }
}
