pub mod contact_message;
pub mod post;
pub mod project;
pub mod user;
pub mod visit;
