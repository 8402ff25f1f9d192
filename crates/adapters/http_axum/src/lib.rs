//! # surveyhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** per record kind (`/mental_health/`, `/social_media/`)
//!   with create/list/get/update/delete and the kind-specific filters
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into HTTP responses, using a single
//!   `{"msg", "detail", "path"}` error body
//!
//! ## Dependency rule
//! Depends on `surveyhub-app` (for port traits and services) and `surveyhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
