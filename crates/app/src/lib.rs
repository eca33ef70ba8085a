//! # confadapt-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** config adapters implement
//!   (`ConfigAdapter` — turn a document into canonical JSON)
//! - Hold the **adapter registry**, populated explicitly at startup
//! - Define the **use-case** that picks an adapter from a `Content-Type`
//!   (`AdaptService`)
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (a reusable byte buffer pool)
//!
//! ## Dependency rule
//! Depends on `confadapt-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod buffer_pool;
pub mod ports;
pub mod registry;
pub mod services;
