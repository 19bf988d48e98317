use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    // Must be "member" or "admin"; membership checked in the service.
    #[validate(length(min = 1, max = 32))]
    pub role: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    // Must be "active" or "suspended"; membership checked in the service.
    #[validate(length(min = 1, max = 32))]
    pub status: String,
}
