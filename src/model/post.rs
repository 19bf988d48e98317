use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Comment embedded inside a Post document. Comments never live in their own
/// collection; every comment carries the id of its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub author: ObjectId,
    pub created_at: bson::DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub author: ObjectId,
    pub is_pinned: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}
