pub mod admin_dto;
pub mod analytics_dto;
pub mod contact_dto;
pub mod content_dto;
pub mod post_dto;
pub mod project_dto;
pub mod stats_dto;
pub mod user_dto;

/// BSON datetimes render as RFC 3339 strings in every JSON response.
pub(crate) fn format_datetime(dt: bson::DateTime) -> String {
    dt.try_to_rfc3339_string().unwrap_or_default()
}

/// Documents expose their ObjectId as a plain hex `id` field.
pub(crate) fn format_id(id: Option<bson::oid::ObjectId>) -> String {
    id.map(|v| v.to_hex()).unwrap_or_default()
}
