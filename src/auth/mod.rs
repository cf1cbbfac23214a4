//! # Authentication Module
//!
//! JWT token issuance and validation, plus the middleware that protects
//! write endpoints.

pub mod jwt;
pub mod middleware;
pub mod models;
