use crate::model::user::User;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use chrono::Utc;
use futures::stream::StreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use tracing::{error, info};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn update(&self, id: ObjectId, user: User) -> RepositoryResult<User>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>>;
    async fn list_all(&self) -> RepositoryResult<Vec<User>>;
    async fn set_role(&self, id: ObjectId, role: &str) -> RepositoryResult<User>;
    async fn set_status(&self, id: ObjectId, status: &str) -> RepositoryResult<User>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoUserRepository {
    collection: mongodb::Collection<User>,
}

impl MongoUserRepository {
    pub async fn new(db: &Database) -> Result<Self, mongodb::error::Error> {
        let collection = db.collection::<User>("users");
        // Unique email index backs the duplicate-signup rejection.
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(index, None).await?;
        Ok(MongoUserRepository { collection })
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        user.id = Some(ObjectId::new());
        let now = Utc::now().to_rfc3339();
        user.created_at = Some(now.clone());
        user.updated_at = Some(now);
        match self.collection.insert_one(user.clone(), None).await {
            Ok(_) => Ok(user),
            Err(e) => Err(RepositoryError::from(e)),
        }
    }

    async fn update(&self, id: ObjectId, mut user: User) -> RepositoryResult<User> {
        user.updated_at = Some(Utc::now().to_rfc3339());
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&user)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize user: {}", e)))?;
        doc.remove("_id");
        let update = doc! { "$set": doc };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => Ok(user),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No user found to update for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update user: {}",
                e
            ))),
        }
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>> {
        let filter = doc! { "_id": id };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by id: {}", e)))?;
        Ok(user)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<User>> {
        let cursor = self
            .collection
            .find(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list users: {}", e)))?;
        let mut users = Vec::new();
        let mut cursor = cursor;
        while let Some(user) = cursor.next().await {
            match user {
                Ok(u) => users.push(u),
                Err(e) => {
                    error!("Failed to deserialize user: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize user: {}",
                        e
                    )));
                }
            }
        }
        Ok(users)
    }

    async fn set_role(&self, id: ObjectId, role: &str) -> RepositoryResult<User> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "role": role, "updated_at": Utc::now().to_rfc3339() } };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => {
                info!("Role updated to {} for user {}", role, id);
                self.find_by_id(&id).await?.ok_or_else(|| {
                    RepositoryError::not_found(format!("User vanished after role update: {}", id))
                })
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No user found to update role for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update role: {}",
                e
            ))),
        }
    }

    async fn set_status(&self, id: ObjectId, status: &str) -> RepositoryResult<User> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "status": status, "updated_at": Utc::now().to_rfc3339() } };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => {
                self.find_by_id(&id).await?.ok_or_else(|| {
                    RepositoryError::not_found(format!("User vanished after status update: {}", id))
                })
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No user found to update status for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update status: {}",
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
                "No user found to delete for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to delete user: {}",
                e
            ))),
        }
    }

    async fn count(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count users: {}", e)))
    }
}
