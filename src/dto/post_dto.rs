use crate::model::post::{Comment, Post};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 280))]
    pub content: String,
    pub event_date: Option<String>,
    #[validate(length(max = 64))]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 280))]
    pub content: Option<String>,
    pub event_date: Option<String>,
    #[validate(length(max = 64))]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 280))]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    pub page: Option<u64>,
    pub limit: Option<i64>,
    pub location: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        CommentResponse {
            id: comment.id.to_hex(),
            content: comment.content.clone(),
            author: comment.author.to_hex(),
            created_at: super::format_datetime(comment.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub author: String,
    pub is_pinned: bool,
    pub comments: Vec<CommentResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        PostResponse {
            id: super::format_id(post.id),
            title: post.title,
            content: post.content,
            event_date: post.event_date,
            location: post.location,
            author: post.author.to_hex(),
            is_pinned: post.is_pinned,
            comments: post.comments.iter().map(CommentResponse::from).collect(),
            created_at: super::format_datetime(post.created_at),
            updated_at: super::format_datetime(post.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}
