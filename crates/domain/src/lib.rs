//! # confadapt-domain
//!
//! Pure domain model for the configuration adaptation service.
//!
//! ## Responsibilities
//! - Parse and classify `Content-Type` values ([`media_type::MediaType`])
//! - Define the **Adaptation** result produced by a config adapter
//!   (canonical JSON bytes plus non-fatal [`warning::Warning`]s)
//! - Define the error taxonomy shared by every layer ([`error::AdaptError`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The adapter boundary is expressed as a trait in the `app` crate (port).

pub mod adaptation;
pub mod error;
pub mod media_type;
pub mod warning;
