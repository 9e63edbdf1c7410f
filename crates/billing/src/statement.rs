//! Invoice aggregation: priced lines plus invoice totals.

use serde::{Deserialize, Serialize};

use playbill_core::{BillingError, BillingResult};

use crate::credits::credits;
use crate::invoice::{Invoice, Performance};
use crate::play::PlayCatalog;
use crate::pricing::charge;

/// One priced statement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    pub play_name: String,
    pub audience: u32,
    /// Charge in smallest currency unit (e.g., cents).
    pub charge: u64,
    pub credits: u64,
}

/// Invoice-level totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Total charge in smallest currency unit.
    pub total_charge: u64,
    pub total_credits: u64,
}

impl InvoiceTotals {
    /// Sum charges and credits over `lines`.
    pub fn from_lines(lines: &[LineResult]) -> BillingResult<Self> {
        lines.iter().try_fold(Self::default(), |totals, line| {
            Ok(Self {
                total_charge: totals
                    .total_charge
                    .checked_add(line.charge)
                    .ok_or_else(|| BillingError::invariant("invoice total overflow"))?,
                total_credits: totals
                    .total_credits
                    .checked_add(line.credits)
                    .ok_or_else(|| BillingError::invariant("credit total overflow"))?,
            })
        })
    }
}

/// Aggregated statement for one invoice, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<LineResult>,
    pub totals: InvoiceTotals,
}

fn price_line(performance: &Performance, plays: &PlayCatalog) -> BillingResult<LineResult> {
    let play = plays.resolve(&performance.play_id)?;
    let charge = charge(performance, play)?;
    let credits = credits(performance, play);

    tracing::debug!(
        play_id = %performance.play_id,
        audience = performance.audience,
        charge,
        credits,
        "priced performance"
    );

    Ok(LineResult {
        play_name: play.name().to_string(),
        audience: performance.audience,
        charge,
        credits,
    })
}

/// Price every performance of `invoice` in order and total the results.
///
/// The first failing line aborts the whole aggregation; no partial statement is
/// ever returned.
pub fn aggregate(invoice: &Invoice, plays: &PlayCatalog) -> BillingResult<Statement> {
    let lines = invoice
        .performances
        .iter()
        .map(|performance| price_line(performance, plays))
        .collect::<BillingResult<Vec<_>>>()
        .inspect_err(|err| {
            tracing::warn!(
                customer = %invoice.customer,
                error = %err,
                "statement aggregation failed"
            );
        })?;

    let totals = InvoiceTotals::from_lines(&lines)?;

    tracing::info!(
        customer = %invoice.customer,
        lines = lines.len(),
        total_charge = totals.total_charge,
        total_credits = totals.total_credits,
        "statement aggregated"
    );

    Ok(Statement {
        customer: invoice.customer.clone(),
        lines,
        totals,
    })
}
