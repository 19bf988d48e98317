pub mod admin_router;
pub mod analytics_router;
pub mod auth_router;
pub mod contact_router;
pub mod content_router;
pub mod post_router;
pub mod project_router;
pub mod stats_router;
pub mod user_router;
