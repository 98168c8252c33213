pub use data::UnicodeVersion;
pub use data::UNICODE_VERSION;
pub use interval::validate;
pub use interval::Interval;
pub use interval::IntervalTable;
pub use interval::TableError;
pub use interval::LAST_CODEPOINT;
pub use properties::PropertiesError;
pub use properties::WordBreak;

mod data;
mod interval;
mod properties;

/// кодпоинт Unicode. корректные значения - 0 ..= 0x10FFFF,
/// остальные допустимы на входе и считаются отсутствующими в таблицах
pub type CodePoint = i32;

/// свойство Word_Break кодпоинта, Other - если кодпоинт не найден в таблице
#[inline]
pub fn get_word_break_property(code: CodePoint) -> WordBreak
{
    match data::WORD_BREAK.lookup(code) {
        Some(value) => *value,
        None => WordBreak::Other,
    }
}

/// является ли кодпоинт комбинирующим символом (CCC != 0)?
#[inline]
pub fn is_combining(code: CodePoint) -> bool
{
    data::COMBINING.contains(code)
}

/// является ли кодпоинт пробелом, разделяющим слова (Word_Break = WSegSpace)?
///
/// проверка без обращения к таблице; набор кодпоинтов совпадает с WSegSpace в WordBreakProperty.txt.
/// U+2007 FIGURE SPACE - неразрывный пробел, в WSegSpace не входит
#[inline]
pub fn is_word_seg_space(code: CodePoint) -> bool
{
    matches!(
        code,
        0x0020 // SPACE
        | 0x1680 // OGHAM SPACE MARK
        | 0x2000 ..= 0x2006 // EN QUAD ..= SIX-PER-EM SPACE
        | 0x2008 ..= 0x200A // PUNCTUATION SPACE ..= HAIR SPACE
        | 0x205F // MEDIUM MATHEMATICAL SPACE
        | 0x3000 // IDEOGRAPHIC SPACE
    )
}

/// is_combining для символа
#[inline]
pub fn is_combining_char(c: char) -> bool
{
    is_combining(c as CodePoint)
}

/// is_word_seg_space для символа
#[inline]
pub fn is_word_seg_space_char(c: char) -> bool
{
    is_word_seg_space(c as CodePoint)
}

/// таблица свойства Word_Break
pub fn word_break_table() -> &'static IntervalTable<'static, WordBreak>
{
    &data::WORD_BREAK
}

/// таблица комбинирующих символов
pub fn combining_table() -> &'static IntervalTable<'static, ()>
{
    &data::COMBINING
}
