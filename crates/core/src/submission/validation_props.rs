//! Property-based tests for the email shape check.

use proptest::prelude::*;

use super::validation::is_valid_email;

/// Independent statement of the accepted shape.
fn reference_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) || email.matches('@').count() != 1 {
        return false;
    }
    let (local, domain) = email.split_once('@').unwrap_or_default();
    let inner = domain
        .strip_prefix(|_: char| true)
        .and_then(|rest| rest.strip_suffix(|_: char| true))
        .unwrap_or("");
    !local.is_empty() && inner.contains('.')
}

/// Strategy for well-formed addresses.
fn well_formed() -> impl Strategy<Value = String> {
    "[a-z0-9._%+-]{1,12}@[a-z0-9-]{1,12}(\\.[a-z0-9-]{1,8}){1,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every well-formed address is accepted.
    #[test]
    fn prop_well_formed_accepted(email in well_formed()) {
        prop_assert!(is_valid_email(&email));
    }

    /// Over a small adversarial alphabet the check agrees with the reference shape.
    #[test]
    fn prop_matches_reference(email in "[ab@. ]{0,8}") {
        prop_assert_eq!(is_valid_email(&email), reference_shape(&email), "{:?}", email);
    }

    /// Any whitespace makes an address invalid.
    #[test]
    fn prop_whitespace_rejected(
        email in well_formed(),
        pos in any::<prop::sample::Index>(),
        ws in prop_oneof![Just(' '), Just('\t'), Just('\n')],
    ) {
        let mut chars: Vec<char> = email.chars().collect();
        let at = pos.index(chars.len() + 1);
        chars.insert(at, ws);
        let email: String = chars.into_iter().collect();
        prop_assert!(!is_valid_email(&email));
    }

    /// Addresses without `@` are rejected.
    #[test]
    fn prop_without_at_rejected(email in "[^@]{0,20}") {
        prop_assert!(!is_valid_email(&email));
    }
}
