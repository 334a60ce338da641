//! Page state and the backend operations each page performs.
//!
//! Async operations take an [`ApiContext`](crate::api::ApiContext) and return
//! a [`ClientError`](crate::error::ClientError) carrying the page's message;
//! the page structs hold what is on screen and absorb those results.

pub mod admin;
pub mod login;
pub mod profile;
pub mod signup;
pub mod voting;
