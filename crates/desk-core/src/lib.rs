//! # desk-core
//!
//! Core types and error types for DeskHub.
//!
//! This crate provides the foundational types shared across all DeskHub crates:
//! - The configurator's `Configuration` record and its option enums
//! - Candidate products with their compatibility requirements
//! - Wire DTOs for the DeskHub REST backend (templates, products, auth, feed)
//! - Cart line items and review summaries returned by the CLI
//! - Cross-cutting error types and input coercion helpers

pub mod entities;
pub mod enums;
pub mod errors;
pub mod numbers;
pub mod responses;

pub use errors::CoreError;
