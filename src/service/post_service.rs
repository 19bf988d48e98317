use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::post_dto::{
    AddCommentRequest, CreatePostRequest, PostListQuery, PostListResponse, PostResponse,
    UpdatePostRequest,
};
use crate::model::post::{Comment, Post};
use crate::model::user::ROLE_ADMIN;
use crate::repository::post_repo::{PostRepository, PostSort};
use crate::util::error::ServiceError;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 50;

/// Resource-owner rule shared by post updates, post deletes, and comment
/// deletes: admins may act on anything, everyone else only on their own.
fn allowed_on(owner: &ObjectId, actor_id: &ObjectId, actor_role: &str) -> bool {
    actor_role == ROLE_ADMIN || owner == actor_id
}

#[async_trait]
pub trait PostService: Send + Sync {
    async fn list(&self, query: PostListQuery) -> Result<PostListResponse, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<PostResponse, ServiceError>;
    async fn create(
        &self,
        author_id: ObjectId,
        request: CreatePostRequest,
    ) -> Result<PostResponse, ServiceError>;
    async fn update(
        &self,
        actor_id: ObjectId,
        actor_role: &str,
        id: ObjectId,
        request: UpdatePostRequest,
    ) -> Result<PostResponse, ServiceError>;
    async fn delete(
        &self,
        actor_id: ObjectId,
        actor_role: &str,
        id: ObjectId,
    ) -> Result<(), ServiceError>;
    async fn add_comment(
        &self,
        author_id: ObjectId,
        post_id: ObjectId,
        request: AddCommentRequest,
    ) -> Result<PostResponse, ServiceError>;
    async fn delete_comment(
        &self,
        actor_id: ObjectId,
        actor_role: &str,
        post_id: ObjectId,
        comment_id: ObjectId,
    ) -> Result<(), ServiceError>;
    /// Flips the pinned flag. Admin access is enforced by the router.
    async fn toggle_pin(&self, id: ObjectId) -> Result<PostResponse, ServiceError>;
}

pub struct PostServiceImpl {
    pub post_repo: Arc<dyn PostRepository>,
}

impl PostServiceImpl {
    pub fn new(post_repo: Arc<dyn PostRepository>) -> Self {
        Self { post_repo }
    }
}

#[async_trait]
impl PostService for PostServiceImpl {
    async fn list(&self, query: PostListQuery) -> Result<PostListResponse, ServiceError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let sort = PostSort::from_param(query.sort.as_deref());

        let (posts, total) = self
            .post_repo
            .list(query.location.as_deref(), sort, page, limit)
            .await?;

        let pages = total.div_ceil(limit as u64).max(1);
        Ok(PostListResponse {
            posts: posts.into_iter().map(PostResponse::from).collect(),
            total,
            page,
            pages,
        })
    }

    async fn get(&self, id: ObjectId) -> Result<PostResponse, ServiceError> {
        let post = self.post_repo.get_by_id(id).await?;
        Ok(PostResponse::from(post))
    }

    #[instrument(skip(self, request), fields(author = %author_id, title = %request.title))]
    async fn create(
        &self,
        author_id: ObjectId,
        request: CreatePostRequest,
    ) -> Result<PostResponse, ServiceError> {
        let now = bson::DateTime::now();
        let post = Post {
            id: None,
            title: request.title,
            content: request.content,
            event_date: request.event_date,
            location: request.location,
            author: author_id,
            is_pinned: false,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let inserted = self.post_repo.insert(post).await?;
        info!("Post created");
        Ok(PostResponse::from(inserted))
    }

    #[instrument(skip(self, request), fields(actor = %actor_id, post = %id))]
    async fn update(
        &self,
        actor_id: ObjectId,
        actor_role: &str,
        id: ObjectId,
        request: UpdatePostRequest,
    ) -> Result<PostResponse, ServiceError> {
        let mut post = self.post_repo.get_by_id(id).await?;
        if !allowed_on(&post.author, &actor_id, actor_role) {
            return Err(ServiceError::Forbidden(
                "Only the author or an admin can modify this post".to_string(),
            ));
        }

        if let Some(title) = request.title {
            post.title = title;
        }
        if let Some(content) = request.content {
            post.content = content;
        }
        if let Some(event_date) = request.event_date {
            post.event_date = Some(event_date);
        }
        if let Some(location) = request.location {
            post.location = Some(location);
        }
        post.updated_at = bson::DateTime::now();

        let updated = self.post_repo.update(id, post).await?;
        Ok(PostResponse::from(updated))
    }

    #[instrument(skip(self), fields(actor = %actor_id, post = %id))]
    async fn delete(
        &self,
        actor_id: ObjectId,
        actor_role: &str,
        id: ObjectId,
    ) -> Result<(), ServiceError> {
        let post = self.post_repo.get_by_id(id).await?;
        if !allowed_on(&post.author, &actor_id, actor_role) {
            return Err(ServiceError::Forbidden(
                "Only the author or an admin can delete this post".to_string(),
            ));
        }
        self.post_repo.delete(id).await?;
        info!("Post deleted");
        Ok(())
    }

    #[instrument(skip(self, request), fields(author = %author_id, post = %post_id))]
    async fn add_comment(
        &self,
        author_id: ObjectId,
        post_id: ObjectId,
        request: AddCommentRequest,
    ) -> Result<PostResponse, ServiceError> {
        // 404 before attempting the push
        self.post_repo.get_by_id(post_id).await?;

        let comment = Comment {
            id: ObjectId::new(),
            content: request.content,
            author: author_id,
            created_at: bson::DateTime::now(),
        };
        let updated = self.post_repo.push_comment(post_id, comment).await?;
        Ok(PostResponse::from(updated))
    }

    #[instrument(skip(self), fields(actor = %actor_id, post = %post_id, comment = %comment_id))]
    async fn delete_comment(
        &self,
        actor_id: ObjectId,
        actor_role: &str,
        post_id: ObjectId,
        comment_id: ObjectId,
    ) -> Result<(), ServiceError> {
        let post = self.post_repo.get_by_id(post_id).await?;
        let comment = post
            .comments
            .iter()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| ServiceError::NotFound("Comment not found".to_string()))?;

        if !allowed_on(&comment.author, &actor_id, actor_role) {
            return Err(ServiceError::Forbidden(
                "Only the comment author or an admin can delete this comment".to_string(),
            ));
        }

        self.post_repo.pull_comment(post_id, comment_id).await?;
        info!("Comment deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(post = %id))]
    async fn toggle_pin(&self, id: ObjectId) -> Result<PostResponse, ServiceError> {
        let post = self.post_repo.get_by_id(id).await?;
        let updated = self.post_repo.set_pinned(id, !post.is_pinned).await?;
        info!(pinned = updated.is_pinned, "Pin flag toggled");
        Ok(PostResponse::from(updated))
    }
}
