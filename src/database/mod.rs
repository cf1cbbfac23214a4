//! # Database Module
//!
//! In-memory stores for users and posts. Nothing is persisted; all data is
//! lost when the process exits.

pub mod models;
pub mod posts;
pub mod users;

pub use models::NewPost;
pub use posts::{InMemoryPostRepository, PostRepository};
pub use users::{UserDirectory, UserRepository};
