use criterion::{criterion_group, criterion_main, Criterion};
use unicode_word_break::{
    get_word_break_property, is_combining, is_word_seg_space, word_break_table,
};


group!(word_break, "word_break", "my", |code: i32| {
    u8::from(get_word_break_property(code))
});

group!(word_break_plain, "word_break", "plain", |code: i32| {
    word_break_table()
        .search(code)
        .map_or(0, |value| u8::from(*value))
});

group!(combining, "combining", "my", |code: i32| is_combining(code) as u8);

group!(seg_space, "seg_space", "my", |code: i32| is_word_seg_space(code) as u8);

criterion_group!(benches, word_break, word_break_plain, combining, seg_space);
criterion_main!(benches);
