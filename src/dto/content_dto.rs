use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters shared by the moderation listing.
#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    #[serde(rename = "type")]
    pub item_type: String,
    pub search: Option<String>,
    pub filter: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostModerationItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub is_pinned: bool,
    pub comment_count: usize,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectModerationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub featured: bool,
    pub creator: String,
    pub created_at: String,
}

/// Embedded comment flattened into a top-level record, denormalized with the
/// id and title of the post it lives in.
#[derive(Debug, Clone, Serialize)]
pub struct CommentModerationItem {
    pub id: String,
    pub content: String,
    pub author: String,
    pub post_id: String,
    pub post_title: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContentItem {
    Post(PostModerationItem),
    Project(ProjectModerationItem),
    Comment(CommentModerationItem),
}

#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub items: Vec<ContentItem>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BulkActionRequest {
    // "posts" or "projects"
    #[validate(length(min = 1))]
    pub item_type: String,
    // delete | pin | unpin | feature | unfeature
    #[validate(length(min = 1))]
    pub action: String,
    #[validate(length(min = 1))]
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkActionResponse {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ContentCounts {
    pub posts: u64,
    pub projects: u64,
    pub comments: i64,
}
