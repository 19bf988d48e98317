pub mod admin_handler;
pub mod analytics_handler;
pub mod auth_handler;
pub mod contact_handler;
pub mod content_handler;
pub mod post_handler;
pub mod project_handler;
pub mod stats_handler;
pub mod user_handler;

use crate::util::error::HandlerError;
use bson::oid::ObjectId;

pub(crate) fn parse_object_id(id: &str, what: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(id).map_err(|_| HandlerError::bad_request(format!("Invalid {} id", what)))
}
