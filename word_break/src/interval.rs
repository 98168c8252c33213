use core::fmt;

use crate::data::UnicodeVersion;
use crate::CodePoint;

/// последний кодпоинт Unicode
pub const LAST_CODEPOINT: CodePoint = 0x10FFFF;

/// кодпоинты Latin-1 (U+0000 ..= U+00FF) - для них поиск ведётся только по началу таблицы
const LATIN1_BOUNDARY: CodePoint = 0x100;

/// интервал [first, last] кодпоинтов с одинаковым значением свойства
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T>
{
    /// первый кодпоинт интервала
    pub first: CodePoint,
    /// последний кодпоинт интервала (включительно)
    pub last: CodePoint,
    /// значение свойства
    pub value: T,
}

impl<T> Interval<T>
{
    #[inline]
    pub const fn new(first: CodePoint, last: CodePoint, value: T) -> Self
    {
        Self { first, last, value }
    }

    /// входит ли кодпоинт в интервал?
    #[inline(always)]
    pub fn contains(&self, code: CodePoint) -> bool
    {
        self.first <= code && code <= self.last
    }
}

impl Interval<()>
{
    /// интервал без значения - таблица хранит только факт вхождения кодпоинта
    #[inline]
    pub const fn range(first: CodePoint, last: CodePoint) -> Self
    {
        Self::new(first, last, ())
    }
}

/// ошибки в данных таблицы интервалов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError
{
    /// first > last
    EmptyInterval { index: usize },
    /// интервал начинается не позже окончания предыдущего
    Unordered { index: usize },
}

impl fmt::Display for TableError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::EmptyInterval { index } => {
                write!(f, "интервал #{}: первый кодпоинт больше последнего", index)
            }
            Self::Unordered { index } => {
                write!(
                    f,
                    "интервал #{}: пересекается с предыдущим или нарушает порядок сортировки",
                    index
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

/// проверка таблицы: интервалы не пустые, отсортированы и не пересекаются
pub const fn validate<T>(intervals: &[Interval<T>]) -> Result<(), TableError>
{
    let mut index = 0;

    while index < intervals.len() {
        if intervals[index].first > intervals[index].last {
            return Err(TableError::EmptyInterval { index });
        }

        if index > 0 && intervals[index - 1].last >= intervals[index].first {
            return Err(TableError::Unordered { index });
        }

        index += 1;
    }

    Ok(())
}

/// неизменяемая таблица интервалов свойства
#[derive(Debug, Clone, Copy)]
pub struct IntervalTable<'a, T>
{
    /// интервалы, отсортированные по first
    intervals: &'a [Interval<T>],
    /// версия Unicode, из данных которой собрана таблица
    version: UnicodeVersion,
    /// количество интервалов, начинающихся в Latin-1: граница поиска для кодпоинтов < U+0100
    latin1_top: usize,
}

impl<'a, T> IntervalTable<'a, T>
{
    /// таблица из заранее подготовленных данных. проверка выполняется при вычислении константы,
    /// так что некорректные данные в static не скомпилируются
    pub const fn new(version: UnicodeVersion, intervals: &'a [Interval<T>]) -> Self
    {
        if validate(intervals).is_err() {
            panic!("интервалы таблицы должны быть непустыми, отсортированными и не пересекаться");
        }

        Self::from_validated(version, intervals)
    }

    /// таблица из данных, корректность которых неизвестна
    pub const fn try_new(
        version: UnicodeVersion,
        intervals: &'a [Interval<T>],
    ) -> Result<Self, TableError>
    {
        match validate(intervals) {
            Ok(()) => Ok(Self::from_validated(version, intervals)),
            Err(error) => Err(error),
        }
    }

    const fn from_validated(version: UnicodeVersion, intervals: &'a [Interval<T>]) -> Self
    {
        let mut latin1_top = 0;

        while latin1_top < intervals.len() && intervals[latin1_top].first < LATIN1_BOUNDARY {
            latin1_top += 1;
        }

        Self {
            intervals,
            version,
            latin1_top,
        }
    }

    /// значение свойства для кодпоинта или None, если кодпоинт не входит ни в один интервал
    #[inline]
    pub fn lookup(&self, code: CodePoint) -> Option<&'a T>
    {
        if !(0 ..= LAST_CODEPOINT).contains(&code) {
            return None;
        }

        match self.intervals.first() {
            Some(interval) if code >= interval.first => (),
            _ => return None,
        }

        // все интервалы, которые могут содержать кодпоинт Latin-1, начинаются до U+0100
        let high = match code < LATIN1_BOUNDARY {
            true => self.latin1_top,
            false => self.intervals.len(),
        };

        self.search_in(code, 0, high)
    }

    /// бинарный поиск по всей таблице, без быстрых проверок
    #[inline]
    pub fn search(&self, code: CodePoint) -> Option<&'a T>
    {
        if !(0 ..= LAST_CODEPOINT).contains(&code) {
            return None;
        }

        self.search_in(code, 0, self.intervals.len())
    }

    /// бинарный поиск в полуинтервале индексов [low, high)
    #[inline(always)]
    fn search_in(&self, code: CodePoint, mut low: usize, mut high: usize) -> Option<&'a T>
    {
        while low < high {
            let mid = (low + high) / 2;
            let interval = &self.intervals[mid];

            if code > interval.last {
                low = mid + 1;
            } else if code < interval.first {
                high = mid;
            } else {
                return Some(&interval.value);
            }
        }

        None
    }

    /// входит ли кодпоинт в один из интервалов таблицы?
    #[inline]
    pub fn contains(&self, code: CodePoint) -> bool
    {
        self.lookup(code).is_some()
    }

    #[inline]
    pub fn intervals(&self) -> &'a [Interval<T>]
    {
        self.intervals
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'a, Interval<T>>
    {
        self.intervals.iter()
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn version(&self) -> UnicodeVersion
    {
        self.version
    }

    /// сколько интервалов просматривается при поиске кодпоинтов Latin-1
    #[inline]
    pub fn latin1_top(&self) -> usize
    {
        self.latin1_top
    }
}

impl<'a, T> IntoIterator for &IntervalTable<'a, T>
{
    type Item = &'a Interval<T>;
    type IntoIter = core::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
