use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_ADMIN: &str = "admin";

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_SUSPENDED: &str = "suspended";

/// Valid role values for admin role updates.
pub const VALID_ROLES: [&str; 2] = [ROLE_MEMBER, ROLE_ADMIN];

/// Valid account status values.
pub const VALID_STATUSES: [&str; 2] = [STATUS_ACTIVE, STATUS_SUSPENDED];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: String, // "member" or "admin"
    pub location: String,
    pub bio: Option<String>,
    pub profile_pic: Option<String>,
    pub status: String, // "active" or "suspended"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
