use unicode_word_break::*;

use crate::data::DOMAIN;

/// быстрая проверка WSegSpace совпадает со значениями таблицы Word_Break
#[test]
fn word_seg_space_matches_table()
{
    for code in DOMAIN {
        assert_eq!(
            is_word_seg_space(code),
            get_word_break_property(code) == WordBreak::WSegSpace,
            "U+{:04X}",
            code
        );
    }
}

/// все функции определены на всей области, включая отрицательные значения и значения за U+10FFFF
#[test]
fn total_over_domain()
{
    let mut counts = [0usize; WordBreak::ALL.len()];
    let mut combining = 0;
    let mut spaces = 0;

    for code in DOMAIN {
        counts[u8::from(get_word_break_property(code)) as usize] += 1;
        combining += is_combining(code) as usize;
        spaces += is_word_seg_space(code) as usize;
    }

    assert_eq!(counts.iter().sum::<usize>(), DOMAIN.count());
    assert!(combining > 0);
    assert_eq!(spaces, 14);
}

/// повторный вызов возвращает тот же результат
#[test]
fn idempotence()
{
    for code in DOMAIN.step_by(97) {
        assert_eq!(get_word_break_property(code), get_word_break_property(code));
        assert_eq!(is_combining(code), is_combining(code));
        assert_eq!(is_word_seg_space(code), is_word_seg_space(code));
    }
}

/// функции для char совпадают с функциями для кодпоинтов
#[test]
fn char_front_doors()
{
    for c in (0 ..= LAST_CODEPOINT as u32).filter_map(char::from_u32) {
        let code = c as CodePoint;

        assert_eq!(WordBreak::of(c), get_word_break_property(code));
        assert_eq!(is_combining_char(c), is_combining(code));
        assert_eq!(is_word_seg_space_char(c), is_word_seg_space(code));
    }
}

/// между комбинирующими символами и Word_Break нет жёсткой связи, но CCC != 0 в UCD
/// имеют только символы, относящиеся к Extend
#[test]
fn combining_marks_extend_words()
{
    for interval in combining_table() {
        for code in interval.first ..= interval.last {
            assert_eq!(get_word_break_property(code), WordBreak::Extend, "U+{:04X}", code);
        }
    }
}
