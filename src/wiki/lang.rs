use std::fmt;
use std::str::FromStr;

/// A Wikipedia language edition code, e.g. "en", "ja", "simple", "zh-yue".
///
/// Validation is syntactic only; whether the edition actually exists is
/// decided by the API when the request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangCode(String);

impl LangCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid language code {0:?}: expected lowercase ASCII letters, digits or hyphens (2-12 chars, starting with a letter)")]
pub struct InvalidLangCode(String);

impl FromStr for LangCode {
    type Err = InvalidLangCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len_ok = (2..=12).contains(&s.len());
        let starts_with_letter = s.chars().next().is_some_and(|c| c.is_ascii_lowercase());
        let chars_ok = s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if len_ok && starts_with_letter && chars_ok {
            Ok(LangCode(s.to_string()))
        } else {
            Err(InvalidLangCode(s.to_string()))
        }
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_codes() {
        for code in ["en", "ja", "de", "simple", "zh-yue", "be-tarask"] {
            assert!(code.parse::<LangCode>().is_ok(), "rejected {code:?}");
        }
    }

    #[test]
    fn rejects_uppercase() {
        assert!("EN".parse::<LangCode>().is_err());
    }

    #[test]
    fn rejects_empty_and_single_char() {
        assert!("".parse::<LangCode>().is_err());
        assert!("e".parse::<LangCode>().is_err());
    }

    #[test]
    fn rejects_whitespace_and_non_ascii() {
        assert!("en wiki".parse::<LangCode>().is_err());
        assert!("日本語".parse::<LangCode>().is_err());
    }

    #[test]
    fn rejects_leading_digit_or_hyphen() {
        assert!("1en".parse::<LangCode>().is_err());
        assert!("-en".parse::<LangCode>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let lang: LangCode = "ja".parse().unwrap();
        assert_eq!(lang.to_string(), "ja");
        assert_eq!(lang.as_str(), "ja");
    }
}
