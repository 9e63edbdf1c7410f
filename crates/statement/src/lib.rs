//! Statement front end: input loading, rendering and the CLI entry point.
//!
//! All pricing happens in `playbill-billing`; this crate only moves data in and
//! out of it.

pub mod config;
pub mod input;
pub mod render;

use anyhow::Context;

use playbill_billing::{Invoice, PlayCatalog, Statement, aggregate};

pub use config::{OutputFormat, StatementConfig};

/// Load the configured inputs and render every invoice's statement.
pub fn run(config: &StatementConfig) -> anyhow::Result<String> {
    let plays = input::load_plays(&config.plays)?;
    let invoices = input::load_invoices(&config.invoices)?;
    tracing::info!(
        plays = plays.len(),
        invoices = invoices.len(),
        "inputs loaded"
    );

    let statements = statements(&invoices, &plays)?;
    render::render_all(&statements, config.format)
        .context("failed to render statements")
}

/// Aggregate each invoice in order. The first billing error aborts the batch.
pub fn statements(invoices: &[Invoice], plays: &PlayCatalog) -> anyhow::Result<Vec<Statement>> {
    invoices
        .iter()
        .map(|invoice| {
            aggregate(invoice, plays)
                .with_context(|| format!("failed to bill invoice for {}", invoice.customer))
        })
        .collect()
}
