//! Candidate name generation.
//!
//! Every character of the name contributes its full variant set, and the
//! generated names are the Cartesian product of those sets. The product
//! grows multiplicatively with name length, so the projected size is logged
//! before generation starts.

use log::{debug, warn};

use crate::substitutions::SubstitutionTable;

/// Projected product size above which generation warns before starting.
const FANOUT_WARN_THRESHOLD: u128 = 10_000_000;

/// Generate every combination of per-character variants for `name`.
///
/// An empty name yields no candidates. Characters without a table entry
/// contribute only themselves, and the identity variant always comes first,
/// so the original name is always one of the results.
pub fn generate_names(name: &str, table: &SubstitutionTable) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }

    let variant_sets: Vec<Vec<char>> = name.chars().map(|c| table.variants_of(c)).collect();

    let projected = variant_sets
        .iter()
        .fold(1u128, |acc, set| acc.saturating_mul(set.len() as u128));
    debug!("projected {} raw candidates for {:?}", projected, name);
    if projected > FANOUT_WARN_THRESHOLD {
        warn!(
            "{:?} projects {} raw candidates, generation may be slow",
            name, projected
        );
    }

    let mut names = vec![String::new()];
    for set in &variant_sets {
        let mut extended = Vec::with_capacity(names.len() * set.len());
        for prefix in &names {
            for &variant in set {
                let mut candidate = prefix.clone();
                candidate.push(variant);
                extended.push(candidate);
            }
        }
        names = extended;
    }
    names
}
