pub mod admin_service;
pub mod analytics_service;
pub mod contact_service;
pub mod content_service;
pub mod post_service;
pub mod project_service;
pub mod stats_service;
pub mod user_service;
