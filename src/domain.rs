//! Domain splitting and input normalization.

use url::Url;

/// Split a domain into its name portion and its extension.
///
/// The extension is everything from the last `.` onward, dot included, and
/// is never varied downstream; a dot-free input has an empty extension.
/// `name` and `extension` always reconstruct the input when concatenated.
pub fn split_domain(domain: &str) -> (&str, &str) {
    match domain.rfind('.') {
        Some(idx) => (&domain[..idx], &domain[idx..]),
        None => (domain, ""),
    }
}

/// Reduce raw user input to a fuzzable domain.
///
/// Full URLs are cut down to their host; anything without a scheme passes
/// through untouched, including strings that would not parse as a URL.
pub fn host_from_input(input: &str) -> String {
    if input.contains("://") {
        if let Ok(url) = Url::parse(input) {
            if let Some(host) = url.host_str() {
                return host.to_string();
            }
        }
    }
    input.to_string()
}
