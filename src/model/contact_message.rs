use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Message submitted by an unauthenticated guest through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_responded: bool,
    pub created_at: Option<String>,
}
