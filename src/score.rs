//! Positional similarity scoring between an original domain and a candidate.

/// Count the positions at which both strings carry the same character.
///
/// Comparison walks both strings in lockstep and stops at the shorter one,
/// so length differences are not penalized beyond the missing positions.
pub fn similarity_score(original: &str, candidate: &str) -> usize {
    original
        .chars()
        .zip(candidate.chars())
        .filter(|(o, c)| o == c)
        .count()
}
