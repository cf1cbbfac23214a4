// Database Models
//
// Plain records held by the in-memory stores.

use serde::{Deserialize, Serialize};

/// Registered user. Passwords are stored and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Blog post as stored and returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// Post creation payload; the id is assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}
