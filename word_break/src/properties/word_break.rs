use core::fmt;

use super::PropertiesError;

/// свойство Word_Break (UAX #29, таблица 3)
/// берется из UCD: auxiliary/WordBreakProperty.txt
///
/// порядок вариантов совпадает с порядком значений в таблице 3 стандарта,
/// Other - значение по умолчанию для кодпоинтов, не упомянутых в UCD
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum WordBreak
{
    /// XX - всё остальное
    #[default]
    Other = 0,
    /// U+000A LINE FEED
    LF = 1,
    /// U+000D CARRIAGE RETURN
    CR = 2,
    /// LE - буквы алфавитов, кроме иврита и катаканы
    ALetter = 3,
    /// FO - символы форматирования, кроме ZWNJ и ZWJ
    Format = 4,
    /// KA - катакана и связанные с ней символы
    Katakana = 5,
    /// NU - цифры
    Numeric = 6,
    /// комбинирующие символы, ZWNJ, модификаторы
    Extend = 7,
    /// NL - разделители строк, кроме LF и CR
    Newline = 8,
    /// EX - соединители, например _
    ExtendNumLet = 9,
    /// RI - региональные индикаторы (флаги)
    RegionalIndicator = 10,
    /// HL - буквы иврита
    HebrewLetter = 11,
    /// SQ - U+0027 APOSTROPHE
    SingleQuote = 12,
    /// DQ - U+0022 QUOTATION MARK
    DoubleQuote = 13,
    /// MN - разделители внутри чисел, например запятая
    MidNum = 14,
    /// ML - разделители внутри слов, например двоеточие
    MidLetter = 15,
    /// MB - разделители и внутри слов, и внутри чисел, например точка
    MidNumLet = 16,
    /// пробельные символы, разделяющие слова
    WSegSpace = 17,
    /// U+200D ZERO WIDTH JOINER
    ZWJ = 18,
}

impl WordBreak
{
    /// все значения в порядке их числовых кодов
    pub const ALL: [Self; 19] = [
        Self::Other,
        Self::LF,
        Self::CR,
        Self::ALetter,
        Self::Format,
        Self::Katakana,
        Self::Numeric,
        Self::Extend,
        Self::Newline,
        Self::ExtendNumLet,
        Self::RegionalIndicator,
        Self::HebrewLetter,
        Self::SingleQuote,
        Self::DoubleQuote,
        Self::MidNum,
        Self::MidLetter,
        Self::MidNumLet,
        Self::WSegSpace,
        Self::ZWJ,
    ];

    /// значение свойства для символа
    #[inline]
    pub fn of(c: char) -> Self
    {
        crate::get_word_break_property(c as crate::CodePoint)
    }

    /// AHLetter = ALetter | Hebrew_Letter (UAX #29, таблица 3a)
    #[inline]
    pub fn is_ah_letter(&self) -> bool
    {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    /// MidNumLetQ = MidNumLet | Single_Quote (UAX #29, таблица 3a)
    #[inline]
    pub fn is_mid_num_let_q(&self) -> bool
    {
        matches!(self, Self::MidNumLet | Self::SingleQuote)
    }

    /// полное название значения, как в UCD
    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Other => "Other",
            Self::LF => "LF",
            Self::CR => "CR",
            Self::ALetter => "ALetter",
            Self::Format => "Format",
            Self::Katakana => "Katakana",
            Self::Numeric => "Numeric",
            Self::Extend => "Extend",
            Self::Newline => "Newline",
            Self::ExtendNumLet => "ExtendNumLet",
            Self::RegionalIndicator => "Regional_Indicator",
            Self::HebrewLetter => "Hebrew_Letter",
            Self::SingleQuote => "Single_Quote",
            Self::DoubleQuote => "Double_Quote",
            Self::MidNum => "MidNum",
            Self::MidLetter => "MidLetter",
            Self::MidNumLet => "MidNumLet",
            Self::WSegSpace => "WSegSpace",
            Self::ZWJ => "ZWJ",
        }
    }
}

impl fmt::Display for WordBreak
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// полное название или сокращение из PropertyValueAliases.txt
impl TryFrom<&str> for WordBreak
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value {
            "XX" | "Other" => Self::Other,
            "LF" => Self::LF,
            "CR" => Self::CR,
            "LE" | "ALetter" => Self::ALetter,
            "FO" | "Format" => Self::Format,
            "KA" | "Katakana" => Self::Katakana,
            "NU" | "Numeric" => Self::Numeric,
            "Extend" => Self::Extend,
            "NL" | "Newline" => Self::Newline,
            "EX" | "ExtendNumLet" => Self::ExtendNumLet,
            "RI" | "Regional_Indicator" => Self::RegionalIndicator,
            "HL" | "Hebrew_Letter" => Self::HebrewLetter,
            "SQ" | "Single_Quote" => Self::SingleQuote,
            "DQ" | "Double_Quote" => Self::DoubleQuote,
            "MN" | "MidNum" => Self::MidNum,
            "ML" | "MidLetter" => Self::MidLetter,
            "MB" | "MidNumLet" => Self::MidNumLet,
            "WSegSpace" => Self::WSegSpace,
            "ZWJ" => Self::ZWJ,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}

impl TryFrom<u8> for WordBreak
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(PropertiesError::UnknownPropertyValue)
    }
}

impl From<WordBreak> for u8
{
    #[inline]
    fn from(value: WordBreak) -> Self
    {
        value as u8
    }
}
