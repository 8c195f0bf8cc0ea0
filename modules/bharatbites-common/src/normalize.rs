//! Name reconciliation between typed guesses, the canonical state list,
//! and whatever naming the map's boundary dataset happens to use.
//!
//! Guess strings come from the canonical list, so they normalize to
//! themselves. Boundary datasets are messier: historical names, `&`
//! spellings, stray punctuation. The alias table absorbs the known
//! variants; anything it misses simply fails to match and the map region
//! stays neutral. That silent degradation is deliberate — an unmapped
//! variant must never take the game down.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::states::StateName;

/// Known historical/alternate names, keyed by lowercased, trimmed input.
/// Checked before the generic fallback so `&`-spelled keys still hit.
///
/// Append-only; extend it whenever a new boundary dataset surfaces a
/// variant. This is a curated list, not an algorithm — it is expected to
/// be incomplete.
const ALIASES: &[(&str, &str)] = &[
    ("orissa", "odisha"),
    ("uttaranchal", "uttarakhand"),
    ("jammu & kashmir", "jammu and kashmir"),
    ("andaman & nicobar islands", "andaman and nicobar islands"),
    ("andaman & nicobar island", "andaman and nicobar islands"),
    ("dadra & nagar haveli", "dadra and nagar haveli and daman and diu"),
    ("dadra and nagar haveli", "dadra and nagar haveli and daman and diu"),
    ("daman & diu", "dadra and nagar haveli and daman and diu"),
    ("daman and diu", "dadra and nagar haveli and daman and diu"),
    ("pondicherry", "puducherry"),
    ("nct of delhi", "delhi"),
    ("national capital territory of delhi", "delhi"),
    ("telengana", "telangana"),
    ("chattisgarh", "chhattisgarh"),
];

/// Canonical comparison form of a free-form state name.
///
/// Lowercase and trim; an exact alias hit wins, otherwise the generic
/// fallback replaces `&` with `and` and strips everything outside
/// `[a-z0-9\s]`. Pure and total — unrecognized input normalizes to its
/// stripped self.
pub fn normalize(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    if let Some((_, canonical)) = ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return (*canonical).to_string();
    }

    lower
        .replace('&', "and")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

/// Whether two free-form names denote the same state.
pub fn is_match(name_a: &str, name_b: &str) -> bool {
    normalize(name_a) == normalize(name_b)
}

fn canonical_index() -> &'static HashMap<String, StateName> {
    static INDEX: OnceLock<HashMap<String, StateName>> = OnceLock::new();
    INDEX.get_or_init(|| {
        StateName::ALL
            .iter()
            .map(|state| (normalize(state.as_str()), *state))
            .collect()
    })
}

/// Resolve a free-form name to its canonical state, if it denotes one.
/// This is the pre-validation gate in front of all distance scoring.
pub fn resolve_state(raw: &str) -> Option<StateName> {
    canonical_index().get(&normalize(raw)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_match_themselves() {
        for state in StateName::ALL {
            assert!(is_match(state.as_str(), state.as_str()));
        }
    }

    #[test]
    fn historical_names_map_to_current_ones() {
        assert!(is_match("Orissa", "Odisha"));
        assert!(is_match("Uttaranchal", "Uttarakhand"));
        assert!(is_match("Pondicherry", "Puducherry"));
    }

    #[test]
    fn ampersand_and_word_spellings_agree() {
        assert!(is_match("Jammu & Kashmir", "Jammu and Kashmir"));
        assert!(is_match(
            "Andaman & Nicobar Islands",
            "Andaman and Nicobar Islands"
        ));
    }

    #[test]
    fn merged_territory_absorbs_both_former_names() {
        assert!(is_match(
            "Dadra & Nagar Haveli",
            "Dadra and Nagar Haveli and Daman and Diu"
        ));
        assert!(is_match(
            "Daman & Diu",
            "Dadra and Nagar Haveli and Daman and Diu"
        ));
    }

    #[test]
    fn case_whitespace_and_punctuation_are_ignored() {
        assert!(is_match("  tamil nadu ", "Tamil Nadu"));
        assert!(is_match("Tamil-Nadu", "Tamil Nadu"));
        assert_eq!(normalize("West Bengal."), "west bengal");
    }

    #[test]
    fn unknown_input_normalizes_to_itself_stripped() {
        assert_eq!(normalize("Atlantis!"), "atlantis");
        assert!(resolve_state("Atlantis").is_none());
    }

    #[test]
    fn every_canonical_name_resolves() {
        for state in StateName::ALL {
            assert_eq!(resolve_state(state.as_str()), Some(state));
        }
    }

    #[test]
    fn aliases_resolve_to_canonical_states() {
        assert_eq!(resolve_state("Orissa"), Some(StateName::Odisha));
        assert_eq!(
            resolve_state("NCT of Delhi"),
            Some(StateName::Delhi)
        );
        assert_eq!(
            resolve_state("Daman & Diu"),
            Some(StateName::DadraAndNagarHaveliAndDamanAndDiu)
        );
    }
}
