use chrono::{NaiveDate, NaiveTime};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Locale candidates tried after the configured one, mirroring the names the
/// data-generation environment uses on Unix and Windows.
const FALLBACK_CANDIDATES: [&str; 2] = ["es_ES.UTF-8", "Spanish_Spain.1252"];

/// Locale used for weekday and month names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayLocale {
    Spanish,
    English,
    /// Plain C/POSIX names, used when nothing else resolves.
    #[default]
    Posix,
}

impl DisplayLocale {
    /// Tries `preferred` and then the built-in Spanish candidates, falling back
    /// to [`DisplayLocale::Posix`] without reporting anything.
    pub fn resolve(preferred: Option<&str>) -> Self {
        preferred
            .into_iter()
            .chain(FALLBACK_CANDIDATES)
            .find_map(|candidate| candidate.parse().ok())
            .unwrap_or_default()
    }

    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            DisplayLocale::Spanish => chrono::Locale::es_ES,
            DisplayLocale::English => chrono::Locale::en_US,
            DisplayLocale::Posix => chrono::Locale::POSIX,
        }
    }

    /// `Miércoles 10 de enero, 2024` with the first letter capitalized.
    pub fn long_date(&self, date: NaiveDate) -> String {
        let formatted = date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized("%A %d de %B, %Y", self.chrono_locale())
            .to_string();
        capitalize(&formatted)
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl FromStr for DisplayLocale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let language = lower
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .split(['_', '-'])
            .next()
            .unwrap_or_default();
        match language {
            "es" | "spanish" => Ok(DisplayLocale::Spanish),
            "en" | "english" => Ok(DisplayLocale::English),
            "c" | "posix" => Ok(DisplayLocale::Posix),
            _ => Err(()),
        }
    }
}

impl Display for DisplayLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayLocale::Spanish => write!(f, "es_ES"),
            DisplayLocale::English => write!(f, "en_US"),
            DisplayLocale::Posix => write!(f, "POSIX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_common_locale_names() {
        assert_eq!("es_ES.UTF-8".parse(), Ok(DisplayLocale::Spanish));
        assert_eq!("Spanish_Spain.1252".parse(), Ok(DisplayLocale::Spanish));
        assert_eq!("en-US".parse(), Ok(DisplayLocale::English));
        assert_eq!("C".parse(), Ok(DisplayLocale::Posix));
        assert_eq!("xx_YY".parse::<DisplayLocale>(), Err(()));
    }

    #[test]
    fn test_resolve_prefers_configured_locale() {
        assert_eq!(DisplayLocale::resolve(Some("en_GB")), DisplayLocale::English);
    }

    #[test]
    fn test_resolve_falls_back_to_spanish_candidates() {
        assert_eq!(DisplayLocale::resolve(Some("klingon")), DisplayLocale::Spanish);
        assert_eq!(DisplayLocale::resolve(None), DisplayLocale::Spanish);
    }

    #[test]
    fn test_long_date_in_spanish_is_capitalized() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(
            DisplayLocale::Spanish.long_date(date),
            "Miércoles 10 de enero, 2024"
        );
    }

    #[test]
    fn test_long_date_in_posix() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(
            DisplayLocale::Posix.long_date(date),
            "Wednesday 10 de january, 2024"
        );
    }
}
