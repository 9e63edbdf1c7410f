//! `playbill-core` — billing domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{BillingError, BillingResult};
pub use id::PlayId;
