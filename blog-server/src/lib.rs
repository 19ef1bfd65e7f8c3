//! In-memory blog post service exposed over HTTP at `/blog-posts`.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
