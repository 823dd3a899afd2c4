//! Priority Conflicts

use rustc_hash::FxHashMap;

use crate::{
    ids::{BrandId, ProductId},
    records::{PriceRecord, Priority},
};

/// Two records for the same product and brand with equal priority and
/// overlapping windows. Resolution still picks one of them, but only through
/// the secondary tie-break rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceConflict<'a> {
    /// The record whose window starts first
    pub first: &'a PriceRecord,

    /// The record whose window starts within `first`'s window
    pub second: &'a PriceRecord,
}

/// Finds every conflicting pair among `records`, ordered by price ids.
pub fn find_conflicts<'a, I>(records: I) -> Vec<PriceConflict<'a>>
where
    I: IntoIterator<Item = &'a PriceRecord>,
{
    let mut groups: FxHashMap<(ProductId, BrandId, Priority), Vec<&'a PriceRecord>> =
        FxHashMap::default();

    for record in records {
        groups
            .entry((record.product_id(), record.brand_id(), record.priority()))
            .or_default()
            .push(record);
    }

    let mut conflicts = Vec::new();

    for group in groups.values_mut() {
        group.sort_by_key(|record| (record.start_date(), record.price_id()));

        for (index, first) in group.iter().enumerate() {
            conflicts.extend(
                group
                    .iter()
                    .skip(index + 1)
                    .take_while(|second| second.start_date() <= first.end_date())
                    .map(|second| PriceConflict {
                        first: *first,
                        second: *second,
                    }),
            );
        }
    }

    conflicts.sort_by_key(|conflict| (conflict.first.price_id(), conflict.second.price_id()));

    conflicts
}
