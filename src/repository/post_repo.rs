use crate::model::post::{Comment, Post};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::{options::FindOptions, Database};
use tracing::{error, info};

/// Sort orders exposed by the post feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    /// Pinned posts first, then newest.
    PinnedRecent,
    Oldest,
}

impl PostSort {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("oldest") => PostSort::Oldest,
            _ => PostSort::PinnedRecent,
        }
    }

    fn as_document(self) -> Document {
        match self {
            PostSort::PinnedRecent => doc! { "is_pinned": -1, "created_at": -1 },
            PostSort::Oldest => doc! { "created_at": 1 },
        }
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: Post) -> RepositoryResult<Post>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Post>;
    async fn update(&self, id: ObjectId, post: Post) -> RepositoryResult<Post>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(
        &self,
        location: Option<&str>,
        sort: PostSort,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Post>, u64)>;
    /// Filtered page for the moderation view; the service builds the query.
    async fn find_with_query(
        &self,
        query: Document,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Post>, u64)>;
    async fn set_pinned(&self, id: ObjectId, pinned: bool) -> RepositoryResult<Post>;
    async fn push_comment(&self, post_id: ObjectId, comment: Comment) -> RepositoryResult<Post>;
    async fn pull_comment(&self, post_id: ObjectId, comment_id: ObjectId) -> RepositoryResult<()>;
    async fn update_many_pinned(&self, ids: &[ObjectId], pinned: bool) -> RepositoryResult<u64>;
    async fn delete_many(&self, ids: &[ObjectId]) -> RepositoryResult<u64>;
    /// All posts that have at least one comment, for the flattened comments view.
    async fn posts_with_comments(&self) -> RepositoryResult<Vec<Post>>;
    /// Sums embedded comment-array sizes across every post.
    async fn total_comment_count(&self) -> RepositoryResult<i64>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoPostRepository {
    collection: mongodb::Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        MongoPostRepository {
            collection: db.collection::<Post>("posts"),
        }
    }

    async fn collect(
        &self,
        cursor: mongodb::Cursor<Post>,
    ) -> RepositoryResult<Vec<Post>> {
        let mut cursor = cursor;
        let mut posts = Vec::new();
        while let Some(post) = cursor.next().await {
            match post {
                Ok(p) => posts.push(p),
                Err(e) => {
                    error!("Failed to deserialize post: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize post: {}",
                        e
                    )));
                }
            }
        }
        Ok(posts)
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    #[tracing::instrument(skip(self, post), fields(title = %post.title))]
    async fn insert(&self, mut post: Post) -> RepositoryResult<Post> {
        post.id = Some(ObjectId::new());
        match self.collection.insert_one(post.clone(), None).await {
            Ok(_) => {
                info!("Post created");
                Ok(post)
            }
            Err(e) => {
                error!("Failed to create post: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to create post: {}",
                    e
                )))
            }
        }
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Post> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Post not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch post by ID: {}",
                e
            ))),
        }
    }

    async fn update(&self, id: ObjectId, post: Post) -> RepositoryResult<Post> {
        let filter = doc! { "_id": id };
        let mut doc = bson::to_document(&post)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize post: {}", e)))?;
        doc.remove("_id");
        let update = doc! { "$set": doc };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => Ok(post),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No post found to update for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update post: {}",
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
                "No post found to delete for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to delete post: {}",
                e
            ))),
        }
    }

    #[tracing::instrument(skip(self), fields(page = page, limit = limit))]
    async fn list(
        &self,
        location: Option<&str>,
        sort: PostSort,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Post>, u64)> {
        let filter = match location {
            Some(loc) => doc! { "location": loc },
            None => doc! {},
        };
        let total = self
            .collection
            .count_documents(filter.clone(), None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count posts: {}", e)))?;

        let page = page.max(1);
        let options = FindOptions::builder()
            .sort(sort.as_document())
            .skip((page - 1) * limit as u64)
            .limit(limit)
            .build();
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list posts: {}", e)))?;
        let posts = self.collect(cursor).await?;
        Ok((posts, total))
    }

    async fn find_with_query(
        &self,
        query: Document,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Post>, u64)> {
        let total = self
            .collection
            .count_documents(query.clone(), None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count posts: {}", e)))?;
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
            .map_err(|e| RepositoryError::database(format!("Failed to query posts: {}", e)))?;
        let posts = self.collect(cursor).await?;
        Ok((posts, total))
    }

    async fn set_pinned(&self, id: ObjectId, pinned: bool) -> RepositoryResult<Post> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "is_pinned": pinned, "updated_at": bson::DateTime::now() } };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(id).await,
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No post found to pin for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to update pin flag: {}",
                e
            ))),
        }
    }

    async fn push_comment(&self, post_id: ObjectId, comment: Comment) -> RepositoryResult<Post> {
        let filter = doc! { "_id": post_id };
        let comment_doc = bson::to_document(&comment).map_err(|e| {
            RepositoryError::serialization(format!("Failed to serialize comment: {}", e))
        })?;
        let update = doc! {
            "$push": { "comments": comment_doc },
            "$set": { "updated_at": bson::DateTime::now() },
        };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => self.get_by_id(post_id).await,
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Post not found for ID: {}",
                post_id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to add comment: {}",
                e
            ))),
        }
    }

    async fn pull_comment(&self, post_id: ObjectId, comment_id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": post_id };
        let update = doc! {
            "$pull": { "comments": { "_id": comment_id } },
            "$set": { "updated_at": bson::DateTime::now() },
        };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.matched_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Post not found for ID: {}",
                post_id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to remove comment: {}",
                e
            ))),
        }
    }

    #[tracing::instrument(skip(self, ids), fields(count = ids.len(), pinned = pinned))]
    async fn update_many_pinned(&self, ids: &[ObjectId], pinned: bool) -> RepositoryResult<u64> {
        let filter = doc! { "_id": { "$in": ids.to_vec() } };
        let update = doc! { "$set": { "is_pinned": pinned, "updated_at": bson::DateTime::now() } };
        let result = self
            .collection
            .update_many(filter, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Bulk pin update failed: {}", e)))?;
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

    async fn posts_with_comments(&self) -> RepositoryResult<Vec<Post>> {
        let filter = doc! { "comments.0": { "$exists": true } };
        let cursor = self
            .collection
            .find(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch posts: {}", e)))?;
        self.collect(cursor).await
    }

    async fn total_comment_count(&self) -> RepositoryResult<i64> {
        let pipeline = vec![
            doc! { "$project": { "comment_count": { "$size": { "$ifNull": ["$comments", []] } } } },
            doc! { "$group": { "_id": null, "total": { "$sum": "$comment_count" } } },
        ];
        let mut cursor = self
            .collection
            .aggregate(pipeline, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Comment count aggregation failed: {}", e)))?;
        if let Some(doc) = cursor.next().await {
            let doc = doc.map_err(|e| {
                RepositoryError::database(format!("Comment count aggregation failed: {}", e))
            })?;
            let total = doc
                .get_i64("total")
                .or_else(|_| doc.get_i32("total").map(i64::from))
                .unwrap_or(0);
            Ok(total)
        } else {
            // No posts at all
            Ok(0)
        }
    }

    async fn count(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to count posts: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_param_parsing() {
        assert_eq!(PostSort::from_param(None), PostSort::PinnedRecent);
        assert_eq!(PostSort::from_param(Some("recent")), PostSort::PinnedRecent);
        assert_eq!(PostSort::from_param(Some("oldest")), PostSort::Oldest);
    }

    #[test]
    fn test_pinned_sort_orders_pinned_first() {
        let doc = PostSort::PinnedRecent.as_document();
        let mut keys = doc.keys();
        assert_eq!(keys.next().map(String::as_str), Some("is_pinned"));
        assert_eq!(keys.next().map(String::as_str), Some("created_at"));
    }
}
