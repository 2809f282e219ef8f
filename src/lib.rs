//! Churn prediction service.
//!
//! Serves a pre-trained churn classification pipeline over a small HTTP
//! API: the artifact is deserialized once at startup, shared read-only
//! across all requests, and applied to one customer record at a time.
//!
//! # Modules
//!
//! - [`model`] - artifact restoration and the inference path
//! - [`server`] - HTTP surface: routing, handlers, error mapping
//! - [`error`] - crate-level error types

pub mod error;
pub mod model;
pub mod server;
