//! Synchronous API client core for the tasks service.
//!
//! # Overview
//! The crate centers on one piece of contract logic: `ApiClient::request`,
//! which resolves a path against the configured base URL, issues the call
//! through a pluggable [`Transport`], and normalizes the outcome into parsed
//! JSON, `None` (204 No Content), or an [`ApiError`].
//!
//! # Design
//! - The base URL is an explicit [`Config`] value passed to the client
//!   constructor and immutable afterwards.
//! - The network boundary is the [`Transport`] trait over plain-data
//!   `HttpRequest` / `HttpResponse` values, so the normalizer is fully
//!   deterministic under test; [`UreqTransport`] does real I/O.
//! - Typed task operations (`list_tasks`, `create_task`, ...) are thin
//!   wrappers over `request` and own the serde conversions.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport};
pub use transport::UreqTransport;
pub use types::{CreateTask, Task};
