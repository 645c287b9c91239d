//! Grouping matches by cycle for display.

use crate::models::{CycleGroup, PadelMatch};
use std::collections::BTreeMap;

/// Newest cycle first; rounds ascending inside each cycle.
pub fn group_by_cycle(matches: &[PadelMatch]) -> Vec<CycleGroup> {
    let mut by_cycle: BTreeMap<u32, Vec<PadelMatch>> = BTreeMap::new();
    for m in matches {
        by_cycle.entry(m.cycle).or_default().push(m.clone());
    }
    by_cycle
        .into_iter()
        .rev()
        .map(|(cycle, mut matches)| {
            matches.sort_by_key(|m| m.round);
            CycleGroup {
                cycle,
                completed: matches.iter().filter(|m| m.completed).count(),
                total: matches.len(),
                matches,
            }
        })
        .collect()
}
