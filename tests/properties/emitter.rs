//! Property tests for array rendering.

use proptest::prelude::*;

use embedgen::{ArrayEmitter, ArrayLayout, ArrayName, Language, LiteralFormat};

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn layout() -> impl Strategy<Value = ArrayLayout> {
    (1usize..=32, language(), any::<bool>()).prop_map(|(group_size, language, uppercase)| {
        ArrayLayout::new()
            .with_group_size(group_size)
            .with_language(language)
            .with_literal(LiteralFormat::new("0x", uppercase))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding the rendered text yields the input bytes.
    #[test]
    fn property_render_decode_round_trip(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
        layout in layout(),
    ) {
        let emitter = ArrayEmitter::new(layout);
        let name = ArrayName::new("blob", emitter.layout().language);

        let emitted = emitter.render(&name, &bytes);

        prop_assert_eq!(emitter.decode(emitted.text()), Some(bytes));
    }

    /// PROPERTY: There are ceil(n / group_size) inner lines, every one ending in a comma.
    #[test]
    fn property_line_count_and_trailing_commas(
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
        layout in layout(),
    ) {
        let group_size = layout.group_size();
        let emitter = ArrayEmitter::new(layout);
        let name = ArrayName::new("blob", emitter.layout().language);

        let emitted = emitter.render(&name, &bytes);
        let lines: Vec<&str> = emitted.text().lines().collect();
        let inner = &lines[1..lines.len() - 1];

        prop_assert_eq!(emitted.line_count(), bytes.len().div_ceil(group_size));
        prop_assert_eq!(inner.len(), emitted.line_count());
        for line in inner {
            prop_assert!(line.ends_with(','));
            prop_assert!(line.matches(',').count() <= group_size);
        }
        prop_assert!(emitted.text().ends_with('\n'));
    }

    /// PROPERTY: Every literal is the prefix plus exactly two hex digits.
    #[test]
    fn property_literals_are_fixed_width(
        bytes in proptest::collection::vec(any::<u8>(), 1..128),
        uppercase in any::<bool>(),
    ) {
        let layout = ArrayLayout::new().with_literal(LiteralFormat::new("0x", uppercase));
        let emitter = ArrayEmitter::new(layout);
        let name = ArrayName::new("blob", Language::C);

        let emitted = emitter.render(&name, &bytes);
        let literals: Vec<&str> = emitted
            .text()
            .lines()
            .skip(1)
            .filter(|l| *l != "};")
            .flat_map(|l| l.trim_end_matches(',').split(','))
            .collect();

        prop_assert_eq!(literals.len(), bytes.len());
        for literal in literals {
            prop_assert_eq!(literal.len(), 4);
            let digits = &literal[2..];
            prop_assert!(digits.chars().all(|c| c.is_ascii_hexdigit()));
            if uppercase {
                prop_assert!(!digits.chars().any(|c| c.is_ascii_lowercase()));
            } else {
                prop_assert!(!digits.chars().any(|c| c.is_ascii_uppercase()));
            }
        }
    }

    /// PROPERTY: Rendering is a pure function of its inputs.
    #[test]
    fn property_render_is_deterministic(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        layout in layout(),
    ) {
        let emitter = ArrayEmitter::new(layout);
        let name = ArrayName::new("blob", emitter.layout().language);

        prop_assert_eq!(emitter.render(&name, &bytes), emitter.render(&name, &bytes));
    }

    /// PROPERTY: Decoding arbitrary text never panics.
    #[test]
    fn property_decode_never_panics(
        text in "(?s).{0,256}",
        layout in layout(),
    ) {
        let _ = ArrayEmitter::new(layout).decode(&text);
    }
}
