//! davshelf - browse a WebDAV media share with TMDB metadata
//!
//! This library crate exposes the core functionality for integration testing.

pub mod catalog;
pub mod links;
pub mod metadata;
pub mod server;
pub mod webdav;
