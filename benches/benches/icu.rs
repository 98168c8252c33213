use criterion::{criterion_group, criterion_main, Criterion};
use icu_properties::{maps, CanonicalCombiningClass, WordBreak};


group!(word_break, "word_break", "icu", {
    let map = maps::word_break();
    move |code: i32| map.get32(code as u32).0
});

group!(combining, "combining", "icu", {
    let map = maps::canonical_combining_class();
    move |code: i32| (map.get32(code as u32) != CanonicalCombiningClass::NotReordered) as u8
});

group!(seg_space, "seg_space", "icu", {
    let map = maps::word_break();
    move |code: i32| (map.get32(code as u32) == WordBreak::WSegSpace) as u8
});

criterion_group!(benches, word_break, combining, seg_space);
criterion_main!(benches);
