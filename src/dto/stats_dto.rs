use serde::Serialize;

/// Headline numbers for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub users: u64,
    pub posts: u64,
    pub projects: u64,
    pub contact_messages: u64,
    pub unresponded_messages: u64,
    pub comments: i64,
}
