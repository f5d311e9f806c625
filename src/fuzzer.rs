//! The fuzzing pipeline.
//!
//! [`DomainFuzzer`] ties the stages together: split the domain, generate
//! name variants, reattach the extension, dedup, drop the original, score
//! every survivor and rank them. [`fuzz_domain`] and [`get_domain`] cover
//! the two common call shapes without constructing a fuzzer by hand.

use std::collections::HashSet;
use std::path::PathBuf;

use log::debug;

use crate::domain::split_domain;
use crate::error::Result;
use crate::generate::generate_names;
use crate::output;
use crate::rank::{rank_and_limit, ScoredDomain};
use crate::score::similarity_score;
use crate::substitutions::SubstitutionTable;

/// Candidates kept when the caller does not pick a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Sink path used when the caller does not pick one.
pub const DEFAULT_OUTPUT: &str = "output.json";

/// Tunable knobs for a [`DomainFuzzer`].
#[derive(Debug, Clone)]
pub struct FuzzConfig {
    /// Maximum number of ranked candidates to keep.
    pub limit: usize,
    /// Where [`DomainFuzzer::run`] persists the JSON records.
    pub output: PathBuf,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Generates and ranks lookalike variants of a domain.
pub struct DomainFuzzer {
    table: SubstitutionTable,
    config: FuzzConfig,
}

impl DomainFuzzer {
    /// Fuzzer with the builtin substitution table and default config.
    pub fn new() -> Self {
        Self::with_config(FuzzConfig::default())
    }

    /// Fuzzer with the builtin substitution table and a custom config.
    pub fn with_config(config: FuzzConfig) -> Self {
        Self {
            table: SubstitutionTable::builtin().clone(),
            config,
        }
    }

    /// Fuzzer with a custom substitution table.
    pub fn with_table(table: SubstitutionTable, config: FuzzConfig) -> Self {
        Self { table, config }
    }

    /// Produce the ranked lookalike candidates for `domain`.
    ///
    /// The original domain is never among the results. A domain with no
    /// name portion, or one whose characters only map to themselves,
    /// yields an empty list.
    pub fn fuzz(&self, domain: &str) -> Vec<ScoredDomain> {
        let (name, extension) = split_domain(domain);
        debug!("split {:?} into name {:?}, extension {:?}", domain, name, extension);

        let candidates = assemble(generate_names(name, &self.table), extension, domain);
        debug!("{} unique candidates for {:?}", candidates.len(), domain);

        let scored = candidates
            .into_iter()
            .map(|candidate| {
                let score = similarity_score(domain, &candidate);
                ScoredDomain::new(candidate, score)
            })
            .collect();
        rank_and_limit(scored, self.config.limit)
    }

    /// Fuzz `domain`, emit the results to stdout and the configured sink,
    /// and hand the records back.
    pub fn run(&self, domain: &str) -> Result<Vec<ScoredDomain>> {
        let results = self.fuzz(domain);
        output::emit(&self.config.output, &results)?;
        Ok(results)
    }
}

impl Default for DomainFuzzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reattach the extension, drop duplicates and the original domain.
fn assemble(names: Vec<String>, extension: &str, original: &str) -> Vec<String> {
    let mut candidates: HashSet<String> = names
        .into_iter()
        .map(|name| format!("{name}{extension}"))
        .collect();
    candidates.remove(original);
    candidates.into_iter().collect()
}

/// Ranked lookalike candidates for `domain`, at most `limit` of them.
///
/// Pure variant of [`get_domain`]: nothing is printed or persisted.
pub fn fuzz_domain(domain: &str, limit: usize) -> Vec<ScoredDomain> {
    DomainFuzzer::with_config(FuzzConfig {
        limit,
        ..FuzzConfig::default()
    })
    .fuzz(domain)
}

/// Top [`DEFAULT_LIMIT`] candidates for `domain`, printed to stdout and
/// persisted to [`DEFAULT_OUTPUT`] in the current directory.
pub fn get_domain(domain: &str) -> Result<Vec<ScoredDomain>> {
    DomainFuzzer::new().run(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_table_end_to_end() {
        let table = SubstitutionTable::from_pairs(&[('a', &['a', '4']), ('b', &['b', '8'])]);
        let results = DomainFuzzer::with_table(table, FuzzConfig::default()).fuzz("ab.com");

        let expected = vec![
            ScoredDomain::new("4b.com", 5),
            ScoredDomain::new("a8.com", 5),
            ScoredDomain::new("48.com", 4),
        ];
        assert_eq!(results, expected);
    }

    #[test]
    fn test_builtin_top_ten_for_test_com() {
        let results = DomainFuzzer::new().fuzz("test.com");

        // Exactly the ten single-substitution variants can score 7.
        let names: Vec<&str> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "+est.com", "7est.com", "t3st.com", "te$t.com", "te5t.com", "tes+.com",
                "tes7.com", "te§t.com", "têst.com", "t€st.com",
            ]
        );
        assert!(results.iter().all(|s| s.score == 7));
    }

    #[test]
    fn test_builtin_ranking_for_ab_com() {
        let results = DomainFuzzer::new().fuzz("ab.com");
        assert_eq!(results.len(), 10);

        let singles: Vec<&str> = results[..8].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            singles,
            vec![
                "4b.com", "@b.com", "^b.com", "a6.com", "a8.com", "aß.com", "àb.com", "áb.com",
            ]
        );
        assert!(results[..8].iter().all(|s| s.score == 5));

        assert_eq!(results[8], ScoredDomain::new("46.com", 4));
        assert_eq!(results[9], ScoredDomain::new("48.com", 4));
    }

    #[test]
    fn test_empty_and_extension_only_inputs() {
        let fuzzer = DomainFuzzer::new();
        assert!(fuzzer.fuzz("").is_empty());
        assert!(fuzzer.fuzz(".com").is_empty());
    }

    #[test]
    fn test_identity_only_domain_yields_nothing() {
        // '7' and '.' have no variants besides themselves.
        assert!(DomainFuzzer::new().fuzz("77.77").is_empty());
    }

    #[test]
    fn test_no_duplicates_and_no_original() {
        let results = fuzz_domain("test.com", 200);
        assert_eq!(results.len(), 143);

        let names: HashSet<&str> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), results.len());
        assert!(!names.contains("test.com"));
    }

    #[test]
    fn test_scores_never_increase_down_the_ranking() {
        let results = fuzz_domain("test.com", 200);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_fuzz_domain_respects_limit() {
        assert_eq!(fuzz_domain("google.com", 5).len(), 5);
        assert!(fuzz_domain("google.com", 0).is_empty());
    }

    #[test]
    fn test_run_persists_records() {
        let dir = tempfile::tempdir().unwrap();
        let config = FuzzConfig {
            limit: 3,
            output: dir.path().join("output.json"),
        };
        let fuzzer = DomainFuzzer::with_config(config.clone());

        let results = fuzzer.run("ab.com").unwrap();
        assert_eq!(results.len(), 3);

        let persisted: Vec<ScoredDomain> =
            serde_json::from_str(&std::fs::read_to_string(&config.output).unwrap()).unwrap();
        assert_eq!(persisted, results);
    }

    #[test]
    fn test_run_with_no_candidates_persists_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let config = FuzzConfig {
            limit: DEFAULT_LIMIT,
            output: dir.path().join("output.json"),
        };

        let results = DomainFuzzer::with_config(config.clone()).run(".com").unwrap();
        assert!(results.is_empty());
        assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "[]");
    }
}
