use core::fmt;

use crate::interval::{Interval, IntervalTable};
use crate::properties::WordBreak::*;
use crate::properties::WordBreak;

/// версия Unicode, из данных которой собраны таблицы
pub const UNICODE_VERSION: UnicodeVersion = UnicodeVersion::new(17, 0, 0);

/// свойство Word_Break, источник - UCD, auxiliary/WordBreakProperty.txt
/// интервалы со значением Other в таблицу не попадают - это значение по умолчанию
pub static WORD_BREAK: IntervalTable<'static, WordBreak> =
    IntervalTable::new(UNICODE_VERSION, WORD_BREAK_INTERVALS);

/// кодпоинты с ненулевым классом канонического комбинирования (CCC), источник - UCD, UnicodeData.txt
pub static COMBINING: IntervalTable<'static, ()> =
    IntervalTable::new(UNICODE_VERSION, COMBINING_INTERVALS);

const WORD_BREAK_INTERVALS: &[Interval<WordBreak>] = include!("./../data/17.0.0/word_break.txt");

const COMBINING_INTERVALS: &[Interval<()>] = include!("./../data/17.0.0/combining.txt");

/// версия стандарта Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeVersion
{
    pub major: u8,
    pub minor: u8,
    pub update: u8,
}

impl UnicodeVersion
{
    pub const fn new(major: u8, minor: u8, update: u8) -> Self
    {
        Self {
            major,
            minor,
            update,
        }
    }
}

impl fmt::Display for UnicodeVersion
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)
    }
}
