//! Generate and rank lookalike variants of a domain name.
//!
//! Given a domain such as `google.com`, the name portion is rewritten with
//! visually or phonetically similar stand-ins for each character (for
//! example `o` becomes `0` and `l` becomes `1`) while the extension stays
//! untouched. Candidates are scored by positional similarity to the
//! original and returned best first.
//!
//! # Example
//!
//! ```
//! use lookalike::fuzz_domain;
//!
//! let results = fuzz_domain("example.com", 5);
//! assert_eq!(results.len(), 5);
//! assert!(results.iter().all(|s| s.name != "example.com"));
//! ```

pub mod domain;
pub mod error;
pub mod fuzzer;
pub mod generate;
pub mod output;
pub mod rank;
pub mod score;
pub mod substitutions;

pub use error::{FuzzError, Result};
pub use fuzzer::{
    fuzz_domain, get_domain, DomainFuzzer, FuzzConfig, DEFAULT_LIMIT, DEFAULT_OUTPUT,
};
pub use rank::ScoredDomain;
pub use substitutions::SubstitutionTable;

/// Crate version from the build metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
