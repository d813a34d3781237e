//! Marginalia Core Library
//!
//! Turns captured article highlights into drafts, and drafts into
//! static-site posts.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod publish;
pub mod request;
pub mod slug;
pub mod store;
