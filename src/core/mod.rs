//! Core building blocks for release-helper
//!
//! - **context**: fixed project paths, resolved once at startup
//! - **error**: unified error types with contextual help messages

pub mod context;
pub mod error;
