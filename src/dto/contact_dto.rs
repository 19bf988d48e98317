use crate::model::contact_message::ContactMessage;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_responded: bool,
    pub created_at: Option<String>,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        ContactMessageResponse {
            id: super::format_id(message.id),
            name: message.name,
            email: message.email,
            message: message.message,
            is_responded: message.is_responded,
            created_at: message.created_at,
        }
    }
}
