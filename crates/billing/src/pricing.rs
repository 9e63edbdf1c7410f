//! Performance pricing.
//!
//! Each genre has a [`Tariff`]: a base fee, an audience threshold above which a
//! fixed premium and a per-head overage apply, and a flat per-head fee charged
//! on the whole audience. All amounts are in minor currency units (cents).

use playbill_core::{BillingError, BillingResult};

use crate::invoice::Performance;
use crate::play::{Genre, Play};

/// Pricing parameters for one genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub base: u64,
    /// Audience size up to which no overage is charged.
    pub threshold: u32,
    /// Flat amount added once the threshold is exceeded.
    pub premium: u64,
    /// Charged per head above the threshold.
    pub overage_rate: u64,
    /// Charged per head for the whole audience.
    pub per_head: u64,
}

pub const TRAGEDY_TARIFF: Tariff = Tariff {
    base: 40_000,
    threshold: 30,
    premium: 0,
    overage_rate: 1_000,
    per_head: 300,
};

pub const COMEDY_TARIFF: Tariff = Tariff {
    base: 30_000,
    threshold: 20,
    premium: 10_000,
    overage_rate: 500,
    per_head: 300,
};

impl Tariff {
    pub fn for_genre(genre: Genre) -> &'static Tariff {
        match genre {
            Genre::Tragedy => &TRAGEDY_TARIFF,
            Genre::Comedy => &COMEDY_TARIFF,
        }
    }

    /// Price a performance with the given audience.
    pub fn price(&self, audience: u32) -> BillingResult<u64> {
        let mut amount = self.base;

        if audience > self.threshold {
            let over = u64::from(audience - self.threshold);
            let overage = self
                .overage_rate
                .checked_mul(over)
                .ok_or_else(|| BillingError::invariant("overage amount overflow"))?;
            amount = amount
                .checked_add(self.premium)
                .and_then(|a| a.checked_add(overage))
                .ok_or_else(|| BillingError::invariant("charge overflow"))?;
        }

        let head_fee = self
            .per_head
            .checked_mul(u64::from(audience))
            .ok_or_else(|| BillingError::invariant("per-head amount overflow"))?;
        amount
            .checked_add(head_fee)
            .ok_or_else(|| BillingError::invariant("charge overflow"))
    }
}

/// Charge for a single performance of `play`.
///
/// Fails with `UnknownGenre` if the play's genre has no tariff.
pub fn charge(performance: &Performance, play: &Play) -> BillingResult<u64> {
    let genre = play.genre()?;
    Tariff::for_genre(genre).price(performance.audience)
}
