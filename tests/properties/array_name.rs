//! Property tests for identifier derivation.

use proptest::prelude::*;

use embedgen::{ArrayName, Language};

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any raw string sanitizes to a valid, non-keyword identifier.
    #[test]
    fn property_name_is_identifier(
        raw in "(?s).{0,64}",
        language in prop::sample::select(Language::ALL.to_vec()),
    ) {
        let name = ArrayName::new(&raw, language);
        prop_assert!(is_identifier(name.as_str()), "not an identifier: {:?}", name.as_str());
        prop_assert_ne!(name.as_str(), "_");
        prop_assert!(!language.is_reserved(name.as_str()));
    }

    /// PROPERTY: Sanitizing an already-sanitized name is a no-op.
    #[test]
    fn property_sanitize_is_idempotent(
        raw in "[A-Za-z0-9._ -]{0,32}",
        language in prop::sample::select(Language::ALL.to_vec()),
    ) {
        let once = ArrayName::new(&raw, language);
        let twice = ArrayName::new(once.as_str(), language);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Rust statics are upper-case, C and C++ names keep their case.
    #[test]
    fn property_rust_names_are_upper_case(raw in "[a-z][a-z0-9_]{0,16}") {
        prop_assume!(!Language::C.is_reserved(&raw));
        let rust_name = ArrayName::new(&raw, Language::Rust);
        let c_name = ArrayName::new(&raw, Language::C);
        prop_assert_eq!(rust_name.as_str(), raw.to_ascii_uppercase());
        prop_assert_eq!(c_name.as_str(), raw.as_str());
    }
}

#[test]
fn keyword_names_are_escaped_per_language() {
    for language in Language::ALL {
        for &word in language.reserved_words() {
            let name = ArrayName::new(word, language);
            assert!(
                !language.is_reserved(name.as_str()),
                "{} still reserved in {}",
                name,
                language
            );
        }
    }
}
