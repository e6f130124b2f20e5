//! Locale tables shipped with the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;
use crate::locale::LocaleDefinition;

const BASE_JSON: &str = include_str!("data/base.json");
const EN_JSON: &str = include_str!("data/en.json");
const ES_JSON: &str = include_str!("data/es.json");
const VI_JSON: &str = include_str!("data/vi.json");
const SK_JSON: &str = include_str!("data/sk.json");
const NB_NO_JSON: &str = include_str!("data/nb_NO.json");

/// Identifier of a bundled locale.
///
/// # Example
///
/// ```
/// use synthetic_data::LocaleId;
///
/// let id: LocaleId = "nb_NO".parse().expect("bundled locale");
/// assert_eq!(id.fallback_chain(), vec![LocaleId::NbNo, LocaleId::En, LocaleId::Base]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleId {
    /// Locale-independent data shared by every locale.
    #[serde(rename = "base")]
    Base,
    /// English.
    #[serde(rename = "en")]
    En,
    /// Spanish.
    #[serde(rename = "es")]
    Es,
    /// Vietnamese.
    #[serde(rename = "vi")]
    Vi,
    /// Slovak.
    #[serde(rename = "sk")]
    Sk,
    /// Norwegian Bokmål (Norway).
    #[serde(rename = "nb_NO")]
    NbNo,
}

impl LocaleId {
    /// Every bundled locale.
    pub const ALL: [Self; 6] = [Self::Base, Self::En, Self::Es, Self::Vi, Self::Sk, Self::NbNo];

    /// Returns the locale code, for example `nb_NO`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::En => "en",
            Self::Es => "es",
            Self::Vi => "vi",
            Self::Sk => "sk",
            Self::NbNo => "nb_NO",
        }
    }

    /// Parses the bundled table for this locale.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the bundled JSON is invalid.
    pub fn definition(self) -> Result<LocaleDefinition, LocaleError> {
        let json = match self {
            Self::Base => BASE_JSON,
            Self::En => EN_JSON,
            Self::Es => ES_JSON,
            Self::Vi => VI_JSON,
            Self::Sk => SK_JSON,
            Self::NbNo => NB_NO_JSON,
        };
        LocaleDefinition::from_json(json)
    }

    /// Returns this locale followed by English and the base table.
    #[must_use]
    pub fn fallback_chain(self) -> Vec<Self> {
        let mut chain = vec![self];
        for fallback in [Self::En, Self::Base] {
            if !chain.contains(&fallback) {
                chain.push(fallback);
            }
        }
        chain
    }

    /// Parses the bundled tables for every locale in `ids`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if any bundled JSON is invalid.
    pub fn definitions(ids: &[Self]) -> Result<Vec<LocaleDefinition>, LocaleError> {
        ids.iter().copied().map(Self::definition).collect()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleId {
    type Err = LocaleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let trimmed = code.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.code() == trimmed)
            .ok_or_else(|| LocaleError::UnknownLocale {
                code: trimmed.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(LocaleId::Base)]
    #[case(LocaleId::En)]
    #[case(LocaleId::Es)]
    #[case(LocaleId::Vi)]
    #[case(LocaleId::Sk)]
    #[case(LocaleId::NbNo)]
    fn bundled_tables_parse_and_carry_their_code(#[case] id: LocaleId) {
        let definition = id.definition().expect("bundled JSON is valid");
        assert_eq!(definition.code(), Some(id.code()));
        assert!(definition.title().is_some());
    }

    #[rstest]
    #[case("en", LocaleId::En)]
    #[case(" nb_NO ", LocaleId::NbNo)]
    fn parses_codes(#[case] code: &str, #[case] expected: LocaleId) {
        assert_eq!(code.parse::<LocaleId>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "xx".parse::<LocaleId>(),
            Err(LocaleError::UnknownLocale {
                code: "xx".to_owned()
            })
        );
    }

    #[rstest]
    #[case(LocaleId::En, vec![LocaleId::En, LocaleId::Base])]
    #[case(LocaleId::Base, vec![LocaleId::Base, LocaleId::En])]
    #[case(LocaleId::Sk, vec![LocaleId::Sk, LocaleId::En, LocaleId::Base])]
    fn builds_fallback_chains(#[case] id: LocaleId, #[case] expected: Vec<LocaleId>) {
        assert_eq!(id.fallback_chain(), expected);
    }

    #[test]
    fn serializes_to_locale_code() {
        let json = serde_json::to_string(&LocaleId::NbNo).expect("serialize");
        assert_eq!(json, "\"nb_NO\"");
    }
}
