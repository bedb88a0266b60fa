#![no_main]

use embedgen::{ArrayEmitter, ArrayLayout, ArrayName, Language, LiteralFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&knobs, bytes)) = data.split_first() else {
        return;
    };

    let language = Language::ALL[usize::from(knobs & 0b11) % Language::ALL.len()];
    let layout = ArrayLayout::new()
        .with_group_size(usize::from(knobs >> 3))
        .with_language(language)
        .with_literal(LiteralFormat::new("0x", knobs & 0b100 != 0));
    let emitter = ArrayEmitter::new(layout);
    let name = ArrayName::new("fuzz", language);

    let emitted = emitter.render(&name, bytes);
    assert_eq!(emitter.decode(emitted.text()).as_deref(), Some(bytes));
});
