//! Deterministic event identity.
//!
//! Two identifiers are derived per event:
//!
//! - **id**: hash over trimmed, case-folded state, title and city. Any detail
//!   change yields a new id.
//! - **stable key**: same inputs, but the title additionally loses every
//!   date-shaped substring and all punctuation, so `Club 4.4.26` and
//!   `Club 4.5.26` share a key.
//!
//! Both are the first [`ID_HEX_LEN`] hex chars of a SHA256 over the
//! `|`-joined components.

use sha2::{Digest, Sha256};

use crate::extract::dates::{collapse_whitespace, strip_date_tokens};

/// Length of the hex prefix kept from the SHA256 digest.
pub const ID_HEX_LEN: usize = 16;

/// Trim and case-fold. Inner spacing is kept, so it still counts toward the id.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Reduced normalization for stable keys: dates, punctuation and repeated
/// whitespace removed.
pub fn normalize_loose(text: &str) -> String {
    let stripped = strip_date_tokens(&normalize(text));
    let alnum: String = stripped
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    collapse_whitespace(&alnum)
}

/// Exact-content identity.
pub fn event_id(state: &str, title: &str, city: &str) -> String {
    hash_components(&[&normalize(state), &normalize(title), &normalize(city)])
}

/// Drift-tolerant identity.
pub fn stable_key(state: &str, title: &str, city: &str) -> String {
    hash_components(&[
        &normalize(state),
        &normalize_loose(title),
        &normalize_loose(city),
    ])
}

fn hash_components(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(parts.join("|").as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(ID_HEX_LEN);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Chimera Golf Club "), "chimera golf club");
        assert_eq!(normalize("Chimera   Golf"), "chimera   golf");
    }

    #[test]
    fn test_normalize_loose_drops_dates_and_punctuation() {
        assert_eq!(normalize_loose("Chimera Golf Club 4.4.26"), "chimera golf club");
        assert_eq!(normalize_loose("Chimera Golf Club, (4/5/26)"), "chimera golf club");
        assert_eq!(normalize_loose("St. George's Open"), "st george s open");
    }

    #[test]
    fn test_id_ignores_case_and_outer_space() {
        assert_eq!(
            event_id("NV", "Chimera Golf Club", "Las Vegas"),
            event_id("nv", "  chimera golf club", "LAS VEGAS ")
        );
    }

    #[test]
    fn test_inner_spacing_changes_id_but_not_stable_key() {
        assert_ne!(
            event_id("NV", "Chimera Golf Club", "Las Vegas"),
            event_id("NV", "Chimera  Golf Club", "Las Vegas")
        );
        assert_eq!(
            stable_key("NV", "Chimera Golf Club", "Las Vegas"),
            stable_key("NV", "Chimera  Golf Club", "Las Vegas")
        );
    }

    #[test]
    fn test_id_changes_with_title_date() {
        assert_ne!(
            event_id("NV", "Chimera Golf Club 4.4.26", "Las Vegas"),
            event_id("NV", "Chimera Golf Club 4.5.26", "Las Vegas")
        );
    }

    #[test]
    fn test_stable_key_survives_date_drift() {
        assert_eq!(
            stable_key("NV", "Chimera Golf Club 4.4.26", "Las Vegas"),
            stable_key("NV", "Chimera Golf Club 4.5.26", "Las Vegas")
        );
        assert_eq!(
            stable_key("NV", "Chimera Golf Club - April 4", "Las Vegas"),
            stable_key("NV", "Chimera Golf Club  April 11", "Las Vegas")
        );
    }

    #[test]
    fn test_stable_key_distinguishes_city() {
        assert_ne!(
            stable_key("NV", "Spring Open", "Reno"),
            stable_key("NV", "Spring Open", "Las Vegas")
        );
    }

    #[test]
    fn test_separator_prevents_component_bleed() {
        assert_ne!(event_id("NV", "ab", "c"), event_id("NV", "a", "bc"));
    }

    #[test]
    fn test_hash_length() {
        assert_eq!(event_id("NV", "x", "").len(), ID_HEX_LEN);
    }
}
