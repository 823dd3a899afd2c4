//! Price Resolution
//!
//! Selects the single effective price among candidates that a store has
//! already narrowed to the requested product, brand and instant. Selection
//! never looks at product, brand or window membership again: a store that
//! hands over non-matching records gets a wrong answer, not an error.
//!
//! Among candidates the record with the greatest precedence wins (see
//! [`PriceRecord::cmp_precedence`]):
//!
//! 1. highest priority,
//! 2. most recently started validity window,
//! 3. highest price list id,
//! 4. highest price id.
//!
//! Price ids are unique, so the result does not depend on candidate order.

use std::cmp::Ordering;

use crate::records::PriceRecord;

/// Outcome of resolving a non-empty candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    price: &'a PriceRecord,
    contenders: usize,
}

impl<'a> Resolution<'a> {
    /// The effective price record.
    pub fn price(&self) -> &'a PriceRecord {
        self.price
    }

    /// Number of candidates sharing the winning priority, winner included.
    pub fn contenders(&self) -> usize {
        self.contenders
    }

    /// Whether a secondary rule, not priority alone, picked the winner.
    pub fn is_tie_break(&self) -> bool {
        self.contenders > 1
    }
}

/// Resolves the effective price and reports how contested the win was.
pub fn resolve<'a, I>(candidates: I) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'a PriceRecord>,
{
    let mut winner: Option<&'a PriceRecord> = None;
    let mut contenders = 0;

    for candidate in candidates {
        let Some(current) = winner else {
            winner = Some(candidate);
            contenders = 1;

            continue;
        };

        match candidate.priority().cmp(&current.priority()) {
            Ordering::Greater => {
                winner = Some(candidate);
                contenders = 1;
            }
            Ordering::Equal => {
                contenders += 1;

                if candidate.cmp_precedence(current).is_gt() {
                    winner = Some(candidate);
                }
            }
            Ordering::Less => {}
        }
    }

    winner.map(|price| Resolution { price, contenders })
}

/// Selects the effective price among `candidates`, or `None` when there are
/// no candidates.
pub fn resolve_effective_price<'a, I>(candidates: I) -> Option<&'a PriceRecord>
where
    I: IntoIterator<Item = &'a PriceRecord>,
{
    resolve(candidates).map(|resolution| resolution.price)
}

/// Orders `candidates` from most to least precedent. The first element, if
/// any, is the record [`resolve_effective_price`] selects.
pub fn rank_candidates<'a, I>(candidates: I) -> Vec<&'a PriceRecord>
where
    I: IntoIterator<Item = &'a PriceRecord>,
{
    let mut ranked: Vec<&'a PriceRecord> = candidates.into_iter().collect();

    ranked.sort_by(|a, b| b.cmp_precedence(a));

    ranked
}
