pub mod auth;
pub mod labels;
