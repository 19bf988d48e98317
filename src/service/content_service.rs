use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::{Duration, Utc};
use tracing::{info, instrument};

use crate::dto::content_dto::{
    BulkActionRequest, BulkActionResponse, CommentModerationItem, ContentCounts, ContentItem,
    ContentListResponse, ContentQuery, PostModerationItem, ProjectModerationItem,
};
use crate::model::post::{Comment, Post};
use crate::repository::post_repo::PostRepository;
use crate::repository::project_repo::ProjectRepository;
use crate::util::error::ServiceError;

const DEFAULT_PAGE_SIZE: i64 = 20;
const RECENT_WINDOW_DAYS: i64 = 7;

/// Embedded comment pulled out of its post, still carrying the raw BSON
/// fields so filters can run before DTO conversion.
#[derive(Debug, Clone)]
pub struct FlatComment {
    pub comment: Comment,
    pub post_id: ObjectId,
    pub post_title: String,
}

/// Flattens every embedded comment into a top-level record keyed back to its
/// parent post.
pub fn flatten_comments(posts: &[Post]) -> Vec<FlatComment> {
    posts
        .iter()
        .flat_map(|post| {
            let post_id = post.id.unwrap_or_default();
            let post_title = post.title.clone();
            post.comments.iter().map(move |comment| FlatComment {
                comment: comment.clone(),
                post_id,
                post_title: post_title.clone(),
            })
        })
        .collect()
}

/// Applies the shared search/filter semantics to flattened comments. Runs in
/// application memory; comments have no collection of their own to query.
pub fn filter_comments(
    items: Vec<FlatComment>,
    search: Option<&str>,
    recent_cutoff: Option<bson::DateTime>,
) -> Vec<FlatComment> {
    items
        .into_iter()
        .filter(|item| {
            if let Some(needle) = search {
                let needle = needle.to_lowercase();
                if !item.comment.content.to_lowercase().contains(&needle)
                    && !item.post_title.to_lowercase().contains(&needle)
                {
                    return false;
                }
            }
            if let Some(cutoff) = recent_cutoff {
                if item.comment.created_at < cutoff {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn regex_clause(field: &str, needle: &str) -> Document {
    let mut clause = Document::new();
    clause.insert(field, doc! { "$regex": needle, "$options": "i" });
    clause
}

fn recent_cutoff() -> bson::DateTime {
    bson::DateTime::from_chrono(Utc::now() - Duration::days(RECENT_WINDOW_DAYS))
}

#[async_trait]
pub trait ContentService: Send + Sync {
    async fn list_items(&self, query: ContentQuery) -> Result<ContentListResponse, ServiceError>;
    async fn bulk_action(
        &self,
        request: BulkActionRequest,
    ) -> Result<BulkActionResponse, ServiceError>;
    async fn counts(&self) -> Result<ContentCounts, ServiceError>;
}

pub struct ContentServiceImpl {
    pub post_repo: Arc<dyn PostRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ContentServiceImpl {
    pub fn new(post_repo: Arc<dyn PostRepository>, project_repo: Arc<dyn ProjectRepository>) -> Self {
        Self {
            post_repo,
            project_repo,
        }
    }

    /// Posts and projects share the same search/filter vocabulary but query
    /// their own collections.
    fn post_query(search: Option<&str>, filter: Option<&str>) -> Document {
        let mut query = doc! {};
        if let Some(needle) = search {
            query.insert(
                "$or",
                vec![
                    regex_clause("title", needle),
                    regex_clause("content", needle),
                ],
            );
        }
        match filter {
            Some("pinned") => {
                query.insert("is_pinned", true);
            }
            Some("recent") => {
                query.insert("created_at", doc! { "$gte": recent_cutoff() });
            }
            _ => {}
        }
        query
    }

    fn project_query(search: Option<&str>, filter: Option<&str>) -> Document {
        let mut query = doc! {};
        if let Some(needle) = search {
            query.insert(
                "$or",
                vec![
                    regex_clause("title", needle),
                    regex_clause("description", needle),
                ],
            );
        }
        match filter {
            Some("featured") => {
                query.insert("featured", true);
            }
            Some("recent") => {
                query.insert("created_at", doc! { "$gte": recent_cutoff() });
            }
            _ => {}
        }
        query
    }

    async fn list_comments(
        &self,
        search: Option<&str>,
        filter: Option<&str>,
        page: u64,
        limit: i64,
    ) -> Result<ContentListResponse, ServiceError> {
        let posts = self.post_repo.posts_with_comments().await?;
        let flattened = flatten_comments(&posts);
        let cutoff = match filter {
            Some("recent") => Some(recent_cutoff()),
            _ => None,
        };
        let filtered = filter_comments(flattened, search, cutoff);

        let total = filtered.len() as u64;
        let pages = total.div_ceil(limit as u64).max(1);
        let start = ((page - 1) * limit as u64) as usize;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .map(|flat| {
                ContentItem::Comment(CommentModerationItem {
                    id: flat.comment.id.to_hex(),
                    content: flat.comment.content,
                    author: flat.comment.author.to_hex(),
                    post_id: flat.post_id.to_hex(),
                    post_title: flat.post_title,
                    created_at: crate::dto::format_datetime(flat.comment.created_at),
                })
            })
            .collect();

        Ok(ContentListResponse {
            items,
            total,
            page,
            pages,
        })
    }

    fn parse_ids(ids: &[String]) -> Result<Vec<ObjectId>, ServiceError> {
        ids.iter()
            .map(|id| {
                ObjectId::parse_str(id)
                    .map_err(|_| ServiceError::InvalidInput(format!("Invalid id: {}", id)))
            })
            .collect()
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    #[instrument(skip(self, query), fields(item_type = %query.item_type))]
    async fn list_items(&self, query: ContentQuery) -> Result<ContentListResponse, ServiceError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);
        let search = query.search.as_deref().filter(|s| !s.is_empty());
        let filter = query.filter.as_deref().filter(|s| !s.is_empty());

        match query.item_type.as_str() {
            "posts" => {
                let mongo_query = Self::post_query(search, filter);
                let (posts, total) = self
                    .post_repo
                    .find_with_query(mongo_query, page, limit)
                    .await?;
                let items = posts
                    .into_iter()
                    .map(|post| {
                        ContentItem::Post(PostModerationItem {
                            id: crate::dto::format_id(post.id),
                            title: post.title,
                            content: post.content,
                            author: post.author.to_hex(),
                            is_pinned: post.is_pinned,
                            comment_count: post.comments.len(),
                            created_at: crate::dto::format_datetime(post.created_at),
                        })
                    })
                    .collect();
                let pages = total.div_ceil(limit as u64).max(1);
                Ok(ContentListResponse {
                    items,
                    total,
                    page,
                    pages,
                })
            }
            "projects" => {
                let mongo_query = Self::project_query(search, filter);
                let (projects, total) = self
                    .project_repo
                    .find_with_query(mongo_query, page, limit)
                    .await?;
                let items = projects
                    .into_iter()
                    .map(|project| {
                        ContentItem::Project(ProjectModerationItem {
                            id: crate::dto::format_id(project.id),
                            title: project.title,
                            description: project.description,
                            featured: project.featured,
                            creator: project.creator.to_hex(),
                            created_at: crate::dto::format_datetime(project.created_at),
                        })
                    })
                    .collect();
                let pages = total.div_ceil(limit as u64).max(1);
                Ok(ContentListResponse {
                    items,
                    total,
                    page,
                    pages,
                })
            }
            "comments" => self.list_comments(search, filter, page, limit).await,
            other => Err(ServiceError::InvalidInput(format!(
                "Unknown content type '{}'",
                other
            ))),
        }
    }

    #[instrument(skip(self, request), fields(item_type = %request.item_type, action = %request.action))]
    async fn bulk_action(
        &self,
        request: BulkActionRequest,
    ) -> Result<BulkActionResponse, ServiceError> {
        let ids = Self::parse_ids(&request.ids)?;

        let count = match (request.item_type.as_str(), request.action.as_str()) {
            ("posts", "delete") => self.post_repo.delete_many(&ids).await?,
            ("posts", "pin") => self.post_repo.update_many_pinned(&ids, true).await?,
            ("posts", "unpin") => self.post_repo.update_many_pinned(&ids, false).await?,
            ("projects", "delete") => self.project_repo.delete_many(&ids).await?,
            ("projects", "feature") => self.project_repo.update_many_featured(&ids, true).await?,
            ("projects", "unfeature") => {
                self.project_repo.update_many_featured(&ids, false).await?
            }
            (item_type, action) => {
                return Err(ServiceError::InvalidInput(format!(
                    "Unsupported bulk action '{}' for type '{}'",
                    action, item_type
                )));
            }
        };

        info!(count = count, "Bulk action applied");
        Ok(BulkActionResponse { count })
    }

    async fn counts(&self) -> Result<ContentCounts, ServiceError> {
        let (posts, projects, comments) = futures::try_join!(
            self.post_repo.count(),
            self.project_repo.count(),
            self.post_repo.total_comment_count(),
        )?;
        Ok(ContentCounts {
            posts,
            projects,
            comments,
        })
    }
}
