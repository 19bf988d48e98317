#![allow(dead_code)]

//! In-memory repository implementations and router wiring shared by the
//! integration tests. The real services, handlers, middleware, and routers
//! run unchanged; only the MongoDB edge is swapped out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use bson::{oid::ObjectId, Document};
use chrono::Utc;
use serde_json::Value;

use wuddevdet_backend::config::jwt_conf::JwtConfig;
use wuddevdet_backend::middlewares::auth_middleware::AuthState;
use wuddevdet_backend::model::contact_message::ContactMessage;
use wuddevdet_backend::model::post::{Comment, Post};
use wuddevdet_backend::model::project::Project;
use wuddevdet_backend::model::user::{User, ROLE_MEMBER, STATUS_ACTIVE};
use wuddevdet_backend::model::visit::{CityCount, DailyTraffic, DeviceCount, PageCount, Visit};
use wuddevdet_backend::repository::contact_repo::ContactRepository;
use wuddevdet_backend::repository::post_repo::{PostRepository, PostSort};
use wuddevdet_backend::repository::project_repo::ProjectRepository;
use wuddevdet_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use wuddevdet_backend::repository::user_repo::UserRepository;
use wuddevdet_backend::repository::visit_repo::VisitRepository;
use wuddevdet_backend::router::admin_router::admin_router;
use wuddevdet_backend::router::analytics_router::analytics_router;
use wuddevdet_backend::router::auth_router::auth_router;
use wuddevdet_backend::router::contact_router::contact_router;
use wuddevdet_backend::router::content_router::content_router;
use wuddevdet_backend::router::post_router::post_router;
use wuddevdet_backend::router::project_router::project_router;
use wuddevdet_backend::router::stats_router::stats_router;
use wuddevdet_backend::router::user_router::user_router;
use wuddevdet_backend::service::admin_service::AdminServiceImpl;
use wuddevdet_backend::service::analytics_service::AnalyticsServiceImpl;
use wuddevdet_backend::service::contact_service::ContactServiceImpl;
use wuddevdet_backend::service::content_service::ContentServiceImpl;
use wuddevdet_backend::service::post_service::PostServiceImpl;
use wuddevdet_backend::service::project_service::ProjectServiceImpl;
use wuddevdet_backend::service::stats_service::StatsServiceImpl;
use wuddevdet_backend::service::user_service::UserServiceImpl;
use wuddevdet_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use wuddevdet_backend::util::password::{PasswordUtils, PasswordUtilsImpl};

// ---------------------------------------------------------------------------
// Users

#[derive(Default)]
pub struct MemoryUserRepo {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::already_exists("Duplicate email"));
        }
        user.id = Some(ObjectId::new());
        let now = Utc::now().to_rfc3339();
        user.created_at = Some(now.clone());
        user.updated_at = Some(now);
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: ObjectId, user: User) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user)
            }
            None => Err(RepositoryError::not_found("User not found")),
        }
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id.as_ref() == Some(id))
            .cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn set_role(&self, id: ObjectId, role: &str) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(user) => {
                user.role = role.to_string();
                Ok(user.clone())
            }
            None => Err(RepositoryError::not_found("User not found")),
        }
    }

    async fn set_status(&self, id: ObjectId, status: &str) -> RepositoryResult<User> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(user) => {
                user.status = status.to_string();
                Ok(user.clone())
            }
            None => Err(RepositoryError::not_found("User not found")),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        if users.len() == before {
            return Err(RepositoryError::not_found("User not found"));
        }
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }
}

// ---------------------------------------------------------------------------
// Posts

#[derive(Default)]
pub struct MemoryPostRepo {
    pub posts: Mutex<Vec<Post>>,
}

fn post_matches(post: &Post, query: &Document) -> bool {
    for (key, value) in query {
        match key.as_str() {
            "is_pinned" => {
                if post.is_pinned != value.as_bool().unwrap_or(false) {
                    return false;
                }
            }
            "created_at" => {
                if let Some(clause) = value.as_document() {
                    if let Some(min) = clause.get("$gte").and_then(|b| b.as_datetime()) {
                        if post.created_at < *min {
                            return false;
                        }
                    }
                }
            }
            "$or" => {
                let mut any = false;
                if let bson::Bson::Array(clauses) = value {
                    for clause in clauses {
                        if let Some(clause) = clause.as_document() {
                            for (field, rx) in clause {
                                let pattern = rx
                                    .as_document()
                                    .and_then(|d| d.get_str("$regex").ok())
                                    .unwrap_or_default()
                                    .to_lowercase();
                                let haystack = match field.as_str() {
                                    "title" => post.title.to_lowercase(),
                                    "content" => post.content.to_lowercase(),
                                    _ => continue,
                                };
                                if !pattern.is_empty() && haystack.contains(&pattern) {
                                    any = true;
                                }
                            }
                        }
                    }
                }
                if !any {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

#[async_trait]
impl PostRepository for MemoryPostRepo {
    async fn insert(&self, mut post: Post) -> RepositoryResult<Post> {
        post.id = Some(ObjectId::new());
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Post not found"))
    }

    async fn update(&self, id: ObjectId, post: Post) -> RepositoryResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == Some(id)) {
            Some(slot) => {
                *slot = post.clone();
                Ok(post)
            }
            None => Err(RepositoryError::not_found("Post not found")),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != Some(id));
        if posts.len() == before {
            return Err(RepositoryError::not_found("Post not found"));
        }
        Ok(())
    }

    async fn list(
        &self,
        location: Option<&str>,
        sort: PostSort,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let mut selected: Vec<Post> = posts
            .iter()
            .filter(|p| location.is_none() || p.location.as_deref() == location)
            .cloned()
            .collect();
        match sort {
            PostSort::PinnedRecent => selected.sort_by(|a, b| {
                b.is_pinned
                    .cmp(&a.is_pinned)
                    .then(b.created_at.cmp(&a.created_at))
            }),
            PostSort::Oldest => selected.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        let total = selected.len() as u64;
        let start = ((page.max(1) - 1) * limit as u64) as usize;
        let page_items = selected
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();
        Ok((page_items, total))
    }

    async fn find_with_query(
        &self,
        query: Document,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let selected: Vec<Post> = posts
            .iter()
            .filter(|p| post_matches(p, &query))
            .cloned()
            .collect();
        let total = selected.len() as u64;
        let start = ((page.max(1) - 1) * limit as u64) as usize;
        let page_items = selected
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();
        Ok((page_items, total))
    }

    async fn set_pinned(&self, id: ObjectId, pinned: bool) -> RepositoryResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == Some(id)) {
            Some(post) => {
                post.is_pinned = pinned;
                Ok(post.clone())
            }
            None => Err(RepositoryError::not_found("Post not found")),
        }
    }

    async fn push_comment(&self, post_id: ObjectId, comment: Comment) -> RepositoryResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == Some(post_id)) {
            Some(post) => {
                post.comments.push(comment);
                Ok(post.clone())
            }
            None => Err(RepositoryError::not_found("Post not found")),
        }
    }

    async fn pull_comment(&self, post_id: ObjectId, comment_id: ObjectId) -> RepositoryResult<()> {
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id == Some(post_id)) {
            Some(post) => {
                post.comments.retain(|c| c.id != comment_id);
                Ok(())
            }
            None => Err(RepositoryError::not_found("Post not found")),
        }
    }

    async fn update_many_pinned(&self, ids: &[ObjectId], pinned: bool) -> RepositoryResult<u64> {
        let mut posts = self.posts.lock().unwrap();
        let mut modified = 0;
        for post in posts.iter_mut() {
            if let Some(id) = post.id {
                if ids.contains(&id) && post.is_pinned != pinned {
                    post.is_pinned = pinned;
                    modified += 1;
                }
            }
        }
        Ok(modified)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> RepositoryResult<u64> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id.map(|id| !ids.contains(&id)).unwrap_or(true));
        Ok((before - posts.len()) as u64)
    }

    async fn posts_with_comments(&self) -> RepositoryResult<Vec<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.comments.is_empty())
            .cloned()
            .collect())
    }

    async fn total_comment_count(&self) -> RepositoryResult<i64> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.comments.len() as i64)
            .sum())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.posts.lock().unwrap().len() as u64)
    }
}

// ---------------------------------------------------------------------------
// Projects

#[derive(Default)]
pub struct MemoryProjectRepo {
    pub projects: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepo {
    async fn insert(&self, mut project: Project) -> RepositoryResult<Project> {
        project.id = Some(ObjectId::new());
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Project> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Project not found"))
    }

    async fn update(&self, id: ObjectId, project: Project) -> RepositoryResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == Some(id)) {
            Some(slot) => {
                *slot = project.clone();
                Ok(project)
            }
            None => Err(RepositoryError::not_found("Project not found")),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != Some(id));
        if projects.len() == before {
            return Err(RepositoryError::not_found("Project not found"));
        }
        Ok(())
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let mut projects = self.projects.lock().unwrap().clone();
        projects.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(projects)
    }

    async fn find_with_query(
        &self,
        query: Document,
        page: u64,
        limit: i64,
    ) -> RepositoryResult<(Vec<Project>, u64)> {
        let projects = self.projects.lock().unwrap();
        let selected: Vec<Project> = projects
            .iter()
            .filter(|p| {
                if let Ok(featured) = query.get_bool("featured") {
                    if p.featured != featured {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();
        let total = selected.len() as u64;
        let start = ((page.max(1) - 1) * limit as u64) as usize;
        Ok((
            selected
                .into_iter()
                .skip(start)
                .take(limit as usize)
                .collect(),
            total,
        ))
    }

    async fn set_featured(&self, id: ObjectId, featured: bool) -> RepositoryResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id == Some(id)) {
            Some(project) => {
                project.featured = featured;
                Ok(project.clone())
            }
            None => Err(RepositoryError::not_found("Project not found")),
        }
    }

    async fn update_many_featured(
        &self,
        ids: &[ObjectId],
        featured: bool,
    ) -> RepositoryResult<u64> {
        let mut projects = self.projects.lock().unwrap();
        let mut modified = 0;
        for project in projects.iter_mut() {
            if let Some(id) = project.id {
                if ids.contains(&id) && project.featured != featured {
                    project.featured = featured;
                    modified += 1;
                }
            }
        }
        Ok(modified)
    }

    async fn delete_many(&self, ids: &[ObjectId]) -> RepositoryResult<u64> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id.map(|id| !ids.contains(&id)).unwrap_or(true));
        Ok((before - projects.len()) as u64)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.projects.lock().unwrap().len() as u64)
    }
}

// ---------------------------------------------------------------------------
// Contact messages

#[derive(Default)]
pub struct MemoryContactRepo {
    pub messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactRepository for MemoryContactRepo {
    async fn insert(&self, mut message: ContactMessage) -> RepositoryResult<ContactMessage> {
        message.id = Some(ObjectId::new());
        message.created_at = Some(Utc::now().to_rfc3339());
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactMessage> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == Some(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Contact message not found"))
    }

    async fn list(&self) -> RepositoryResult<Vec<ContactMessage>> {
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn set_responded(
        &self,
        id: ObjectId,
        responded: bool,
    ) -> RepositoryResult<ContactMessage> {
        let mut messages = self.messages.lock().unwrap();
        match messages.iter_mut().find(|m| m.id == Some(id)) {
            Some(message) => {
                message.is_responded = responded;
                Ok(message.clone())
            }
            None => Err(RepositoryError::not_found("Contact message not found")),
        }
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != Some(id));
        if messages.len() == before {
            return Err(RepositoryError::not_found("Contact message not found"));
        }
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.messages.lock().unwrap().len() as u64)
    }

    async fn count_unresponded(&self) -> RepositoryResult<u64> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !m.is_responded)
            .count() as u64)
    }
}

// ---------------------------------------------------------------------------
// Visits

/// Visit store that can be flipped into a failing state to exercise the
/// fallback paths.
#[derive(Default)]
pub struct MemoryVisitRepo {
    pub visits: Mutex<Vec<Visit>>,
    pub fail: AtomicBool,
}

impl MemoryVisitRepo {
    fn check(&self) -> RepositoryResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::database("visit store unavailable"));
        }
        Ok(())
    }

    fn in_range(&self, start: bson::DateTime) -> Vec<Visit> {
        self.visits
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.timestamp >= start)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl VisitRepository for MemoryVisitRepo {
    async fn insert(&self, visit: Visit) -> RepositoryResult<Visit> {
        self.check()?;
        self.visits.lock().unwrap().push(visit.clone());
        Ok(visit)
    }

    async fn totals(&self, start: bson::DateTime) -> RepositoryResult<(i64, i64)> {
        self.check()?;
        let visits = self.in_range(start);
        let unique: std::collections::HashSet<_> =
            visits.iter().map(|v| v.visitor_id.clone()).collect();
        Ok((visits.len() as i64, unique.len() as i64))
    }

    async fn daily_traffic(&self, start: bson::DateTime) -> RepositoryResult<Vec<DailyTraffic>> {
        self.check()?;
        let mut by_day: std::collections::BTreeMap<String, (i64, std::collections::HashSet<String>)> =
            Default::default();
        for visit in self.in_range(start) {
            let day = visit
                .timestamp
                .try_to_rfc3339_string()
                .unwrap_or_default()
                .chars()
                .take(10)
                .collect::<String>();
            let entry = by_day.entry(day).or_default();
            entry.0 += 1;
            entry.1.insert(visit.visitor_id);
        }
        Ok(by_day
            .into_iter()
            .map(|(date, (visits, unique))| DailyTraffic {
                date,
                visits,
                unique_visitors: unique.len() as i64,
            })
            .collect())
    }

    async fn top_pages(
        &self,
        start: bson::DateTime,
        limit: i64,
    ) -> RepositoryResult<Vec<PageCount>> {
        self.check()?;
        let mut counts: std::collections::HashMap<String, i64> = Default::default();
        for visit in self.in_range(start) {
            *counts.entry(visit.page).or_default() += 1;
        }
        let mut pages: Vec<PageCount> = counts
            .into_iter()
            .map(|(page, visits)| PageCount { page, visits })
            .collect();
        pages.sort_by(|a, b| b.visits.cmp(&a.visits));
        pages.truncate(limit as usize);
        Ok(pages)
    }

    async fn device_breakdown(&self, start: bson::DateTime) -> RepositoryResult<Vec<DeviceCount>> {
        self.check()?;
        let mut counts: std::collections::HashMap<String, i64> = Default::default();
        for visit in self.in_range(start) {
            *counts.entry(visit.device_type).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(device_type, visits)| DeviceCount {
                device_type,
                visits,
            })
            .collect())
    }

    async fn by_city(&self, start: bson::DateTime) -> RepositoryResult<Vec<CityCount>> {
        self.check()?;
        let mut counts: std::collections::HashMap<String, i64> = Default::default();
        for visit in self.in_range(start) {
            *counts.entry(visit.location.city).or_default() += 1;
        }
        let mut cities: Vec<CityCount> = counts
            .into_iter()
            .map(|(city, visits)| CityCount { city, visits })
            .collect();
        cities.sort_by(|a, b| b.visits.cmp(&a.visits));
        Ok(cities)
    }
}

// ---------------------------------------------------------------------------
// App wiring

pub struct TestBackend {
    pub router: Router,
    pub user_repo: Arc<MemoryUserRepo>,
    pub post_repo: Arc<MemoryPostRepo>,
    pub project_repo: Arc<MemoryProjectRepo>,
    pub contact_repo: Arc<MemoryContactRepo>,
    pub visit_repo: Arc<MemoryVisitRepo>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

pub fn build_app() -> TestBackend {
    let user_repo = Arc::new(MemoryUserRepo::default());
    let post_repo = Arc::new(MemoryPostRepo::default());
    let project_repo = Arc::new(MemoryProjectRepo::default());
    let contact_repo = Arc::new(MemoryContactRepo::default());
    let visit_repo = Arc::new(MemoryVisitRepo::default());
    let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default()));

    let user_service = Arc::new(UserServiceImpl::new(user_repo.clone(), jwt_utils.clone()));
    let admin_service = Arc::new(AdminServiceImpl::new(user_repo.clone()));
    let post_service = Arc::new(PostServiceImpl::new(post_repo.clone()));
    let project_service = Arc::new(ProjectServiceImpl::new(project_repo.clone()));
    let contact_service = Arc::new(ContactServiceImpl::new(contact_repo.clone()));
    let content_service = Arc::new(ContentServiceImpl::new(
        post_repo.clone(),
        project_repo.clone(),
    ));
    let analytics_service = Arc::new(AnalyticsServiceImpl::new(visit_repo.clone()));
    let stats_service = Arc::new(StatsServiceImpl::new(
        user_repo.clone(),
        post_repo.clone(),
        project_repo.clone(),
        contact_repo.clone(),
    ));

    let auth_state = Arc::new(AuthState {
        jwt_utils: jwt_utils.clone(),
        user_repo: user_repo.clone(),
    });

    let api = Router::new()
        .merge(auth_router(user_service.clone(), auth_state.clone()))
        .merge(user_router(user_service, auth_state.clone()))
        .merge(post_router(post_service, auth_state.clone()))
        .merge(project_router(project_service, auth_state.clone()))
        .merge(contact_router(contact_service, auth_state.clone()))
        .merge(admin_router(admin_service, auth_state.clone()))
        .merge(content_router(content_service, auth_state.clone()))
        .merge(analytics_router(analytics_service, auth_state.clone()))
        .merge(stats_router(stats_service, auth_state));

    let router = Router::new().nest("/api", api);

    TestBackend {
        router,
        user_repo,
        post_repo,
        project_repo,
        contact_repo,
        visit_repo,
        jwt_utils,
    }
}

/// Inserts a user directly and returns its id plus a valid bearer token.
pub async fn seed_user(backend: &TestBackend, email: &str, role: &str) -> (ObjectId, String) {
    let password_hash = PasswordUtilsImpl::hash_password("longenough").unwrap();
    let user = User {
        id: None,
        email: email.to_string(),
        password_hash,
        name: "Test User".to_string(),
        role: role.to_string(),
        location: "Detroit".to_string(),
        bio: None,
        profile_pic: None,
        status: STATUS_ACTIVE.to_string(),
        created_at: None,
        updated_at: None,
    };
    let inserted = backend.user_repo.insert(user).await.unwrap();
    let id = inserted.id.unwrap();
    let token = backend
        .jwt_utils
        .generate_token(&id.to_hex(), email, role)
        .unwrap();
    (id, token)
}

pub async fn seed_member(backend: &TestBackend, email: &str) -> (ObjectId, String) {
    seed_user(backend, email, ROLE_MEMBER).await
}

pub fn seed_post(backend: &TestBackend, author: ObjectId, title: &str) -> ObjectId {
    let now = bson::DateTime::now();
    let id = ObjectId::new();
    backend.post_repo.posts.lock().unwrap().push(Post {
        id: Some(id),
        title: title.to_string(),
        content: "content".to_string(),
        event_date: None,
        location: None,
        author,
        is_pinned: false,
        comments: Vec::new(),
        created_at: now,
        updated_at: now,
    });
    id
}

pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
