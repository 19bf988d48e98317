use crate::model::project::Project;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::{options::FindOptions, Database};
use tracing::error;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, project: Project) -> RepositoryResult<Project>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Project>;
    async fn update(&self, id: ObjectId, project: Project) -> RepositoryResult<Project>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    /// Full showcase list, featured entries first.
    async fn list(&self) -> RepositoryResult<Vec<Project>>;
    async fn find_with_query(
        &self,
        query: Document,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Project>, u64)>;
    async fn set_featured(&self, id: ObjectId, featured: bool) -> RepositoryResult<Project>;
    async fn update_many_featured(&self, ids: &[ObjectId], featured: bool) -> RepositoryResult<u64>;
    async fn delete_many(&self, ids: &[ObjectId]) -> RepositoryResult<u64>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoProjectRepository {
    collection: mongodb::Collection<Project>,
}

impl MongoProjectRepository {
    pub fn new(db: &Database) -> Self {
        MongoProjectRepository {
            collection: db.collection::<Project>("projects"),
        }
    }

    async fn collect(
        &self,
        cursor: mongodb::Cursor<Project>,
    ) -> RepositoryResult<Vec<Project>> {
        let mut cursor = cursor;
        let mut projects = Vec::new();
        while let Some(project) = cursor.next().await {
            match project {
                Ok(p) => projects.push(p),
                Err(e) => {
                    error!("Failed to deserialize project: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize project: {}",
                        e
                    )));
                }
            }
        }
        Ok(projects)
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn insert(&self, mut project: Project) -> RepositoryResult<Project> {
        project.id = Some(ObjectId::new());
        match self.collection.insert_one(project.clone(), None).await {
            Ok(_) => Ok(project),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to create project: {}",
                e
            ))),
        }
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Project> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(project)) => Ok(project),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Project not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch project by ID: {}",
                e
            ))),
        }
    }

    async fn update(&self, id: ObjectId, project: Project) -> RepositoryResult<Project> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&project).map_err(|e| {
            RepositoryError::serialization(format!("Failed to serialize project: {}", e))
        })?;
        doc.remove("_id");
        let update = doc! { "$set": doc };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => Ok(project),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No project found to update for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update project: {}",
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
                "No project found to delete for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to delete project: {}",
                e
            ))),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let options = FindOptions::builder()
            .sort(doc! { "featured": -1, "created_at": -1 })
            .build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list projects: {}", e)))?;
        self.collect(cursor).await
    }

    async fn find_with_query(
        &self,
        query: Document,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Project>, u64)> {
        let total = self
            .collection
            .count_documents(query.clone(), None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count projects: {}", e)))?;
        let page = page.max(1);
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip((page - 1) * limit as u64)
            .limit(limit)
            .build();
        let cursor = self
            .collection
            .find(query, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to query projects: {}", e)))?;
        let projects = self.collect(cursor).await?;
        Ok((projects, total))
    }

    async fn set_featured(&self, id: ObjectId, featured: bool) -> RepositoryResult<Project> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "featured": featured, "updated_at": bson::DateTime::now() } };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No project found to feature for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update featured flag: {}",
                e
            ))),
        }
    }

    async fn update_many_featured(
        &self,
        ids: &[ObjectId],
        featured: bool,
    ) -> RepositoryResult<u64> {
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let update = doc! { "$set": { "featured": featured, "updated_at": bson::DateTime::now() } };
        let result = self
            .collection
            .update_many(filter, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Bulk feature update failed: {}", e)))?;
        Ok(result.modified_count)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> RepositoryResult<u64> {
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let result = self
            .collection
            .delete_many(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Bulk delete failed: {}", e)))?;
        Ok(result.deleted_count)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count projects: {}", e)))
    }
}
