//! # confadapt-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the admin **`/adapt`** endpoint: read a configuration document,
//!   adapt it according to its `Content-Type`, answer with canonical JSON
//! - Serve a `/health` probe
//! - Map application errors into HTTP responses (`{"error": "..."}` bodies)
//!
//! ## Dependency rule
//! Depends on `confadapt-app` (for the adapt service and buffer pool) and
//! `confadapt-domain` (for error and warning types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
