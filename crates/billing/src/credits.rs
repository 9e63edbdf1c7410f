//! Loyalty credits.

use crate::invoice::Performance;
use crate::play::{Genre, Play};

/// Audience size above which every extra head earns one credit.
pub const CREDIT_THRESHOLD: u32 = 30;

/// Comedies earn one bonus credit per this many heads.
pub const COMEDY_BONUS_DIVISOR: u32 = 5;

/// Credits earned by a single performance of `play`.
///
/// Only this performance's audience counts. Genres without a tariff earn the
/// base credits and no bonus; pricing is where they are rejected.
pub fn credits(performance: &Performance, play: &Play) -> u64 {
    let audience = performance.audience;
    let mut credits = u64::from(audience.saturating_sub(CREDIT_THRESHOLD));
    if play.is_genre(Genre::Comedy) {
        credits += u64::from(audience / COMEDY_BONUS_DIVISOR);
    }
    credits
}
