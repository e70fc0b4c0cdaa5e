pub mod auth;
pub mod dispatch;
pub mod home;
pub mod image;
pub mod open;
pub mod schema;
pub mod shared;
pub mod text;
