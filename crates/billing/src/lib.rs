//! Billing engine for theater-performance invoices.
//!
//! This crate prices each performance, awards loyalty credits and aggregates the
//! results into a statement. It is pure domain logic: no IO, no formatting, no
//! persistence concerns. Rendering lives in `playbill-statement`.

pub mod credits;
pub mod invoice;
pub mod play;
pub mod pricing;
pub mod statement;

pub use credits::credits;
pub use invoice::{Invoice, Performance};
pub use play::{Genre, Play, PlayCatalog};
pub use pricing::{Tariff, charge};
pub use statement::{InvoiceTotals, LineResult, Statement, aggregate};
