//! Application services — use-case implementations.

pub mod adapt_service;
