use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub prototype_url: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub creator: ObjectId,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}
