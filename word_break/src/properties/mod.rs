use core::fmt;

mod word_break;

pub use word_break::WordBreak;

/// ошибка разбора значения свойства
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl fmt::Display for PropertiesError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::UnknownPropertyValue => write!(f, "неизвестное значение свойства"),
        }
    }
}

impl std::error::Error for PropertiesError {}
