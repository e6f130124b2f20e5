//! Generator configuration loaded via OrthoConfig.

use std::ffi::OsString;

use chrono::{DateTime, Utc};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};

use crate::error::SettingsError;
use crate::generator::{Generator, GeneratorOptions};
use crate::locale::LocaleId;

const DEFAULT_LOCALE: &str = "en";

fn default_locales() -> Vec<String> {
    vec![DEFAULT_LOCALE.to_owned()]
}

/// Accepts a single code or a list; the environment layer yields a list only
/// when the value contains a comma.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocaleCodes {
    One(String),
    Many(Vec<String>),
}

fn locale_codes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LocaleCodes::deserialize(deserializer)? {
        LocaleCodes::One(code) => vec![code],
        LocaleCodes::Many(codes) => codes,
    })
}

/// Configuration values for building a generator.
///
/// Values come from `SYNTHETIC_DATA_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SYNTHETIC_DATA")]
pub struct GeneratorSettings {
    /// Seed applied at construction. A random seed is used when absent.
    pub seed: Option<u32>,
    /// Locale codes, highest precedence first. `SYNTHETIC_DATA_LOCALES`
    /// takes a comma-separated chain such as `nb_NO,sk`.
    #[ortho_config(default = default_locales(), merge_strategy = "replace")]
    #[serde(default = "default_locales", deserialize_with = "locale_codes")]
    pub locales: Vec<String>,
    /// Fixed reference date for relative dates, in RFC 3339 form.
    pub ref_date: Option<String>,
}

impl GeneratorSettings {
    /// Loads settings from the environment and configuration files only.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if a source cannot be parsed.
    pub fn load_without_cli(program: &str) -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(program)]).map_err(|e| SettingsError::Load {
            message: e.to_string(),
        })
    }

    /// Returns the configured locale codes, falling back to `en`.
    ///
    /// Entries are trimmed, and an entry holding a comma-separated chain is
    /// split into its codes.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let codes: Vec<&str> = self
            .locales
            .iter()
            .flat_map(|entry| entry.split(','))
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect();
        if codes.is_empty() {
            vec![DEFAULT_LOCALE]
        } else {
            codes
        }
    }

    /// Parses the locale codes and appends English and the base table as
    /// fallbacks.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Locale`] for an unknown code.
    pub fn locale_chain(&self) -> Result<Vec<LocaleId>, SettingsError> {
        let mut chain = Vec::new();
        for code in self.locales() {
            let id: LocaleId = code.parse()?;
            if !chain.contains(&id) {
                chain.push(id);
            }
        }
        for fallback in [LocaleId::En, LocaleId::Base] {
            if !chain.contains(&fallback) {
                chain.push(fallback);
            }
        }
        Ok(chain)
    }

    /// Parses the configured reference date.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidReferenceDate`] if the value is not
    /// RFC 3339.
    pub fn reference_date(&self) -> Result<Option<DateTime<Utc>>, SettingsError> {
        self.ref_date
            .as_deref()
            .map(|value| {
                DateTime::parse_from_rfc3339(value)
                    .map(|parsed| parsed.with_timezone(&Utc))
                    .map_err(|e| SettingsError::InvalidReferenceDate {
                        value: value.to_owned(),
                        message: e.to_string(),
                    })
            })
            .transpose()
    }

    /// Builds a generator from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if a locale code or the reference date is
    /// invalid.
    pub fn build_generator(&self) -> Result<Generator, SettingsError> {
        let definitions = LocaleId::definitions(&self.locale_chain()?)?;
        let mut options = GeneratorOptions::new(definitions);
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        if let Some(instant) = self.reference_date()? {
            options = options.with_default_ref_date(instant);
        }
        Ok(Generator::new(options)?)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for generator configuration parsing.

    use chrono::TimeZone;
    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;
    use crate::error::LocaleError;

    fn load_from_empty_args() -> GeneratorSettings {
        GeneratorSettings::load_without_cli("synthetic-data").expect("config should load")
    }

    fn settings_for(locales: &[&str]) -> GeneratorSettings {
        GeneratorSettings {
            seed: None,
            locales: locales.iter().map(|code| (*code).to_owned()).collect(),
            ref_date: None,
        }
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SYNTHETIC_DATA_SEED", None::<String>),
            ("SYNTHETIC_DATA_LOCALES", None::<String>),
            ("SYNTHETIC_DATA_REF_DATE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.seed.is_none());
        assert_eq!(settings.locales(), vec!["en"]);
        assert_eq!(
            settings.locale_chain(),
            Ok(vec![LocaleId::En, LocaleId::Base])
        );
        assert_eq!(settings.reference_date(), Ok(None));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SYNTHETIC_DATA_SEED", Some("42".to_owned())),
            ("SYNTHETIC_DATA_LOCALES", Some("nb_NO, sk".to_owned())),
            (
                "SYNTHETIC_DATA_REF_DATE",
                Some("2020-02-29T12:00:00Z".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(
            settings.locale_chain(),
            Ok(vec![
                LocaleId::NbNo,
                LocaleId::Sk,
                LocaleId::En,
                LocaleId::Base
            ])
        );
        let expected = Utc
            .with_ymd_and_hms(2020, 2, 29, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(settings.reference_date(), Ok(Some(expected)));
    }

    #[rstest]
    #[case("sk", vec![LocaleId::Sk, LocaleId::En, LocaleId::Base])]
    #[case("vi,es", vec![LocaleId::Vi, LocaleId::Es, LocaleId::En, LocaleId::Base])]
    #[case("en,nb_NO", vec![LocaleId::En, LocaleId::NbNo, LocaleId::Base])]
    fn environment_locales_accept_one_code_or_a_chain(
        #[case] value: &str,
        #[case] expected: Vec<LocaleId>,
    ) {
        let _guard = lock_env([
            ("SYNTHETIC_DATA_SEED", None::<String>),
            ("SYNTHETIC_DATA_LOCALES", Some(value.to_owned())),
            ("SYNTHETIC_DATA_REF_DATE", None::<String>),
        ]);

        assert_eq!(load_from_empty_args().locale_chain(), Ok(expected));
    }

    #[rstest]
    #[case(None, "United States")]
    #[case(Some("nb_NO,sk"), "Norge")]
    fn loaded_settings_build_a_working_generator(
        #[case] locales: Option<&str>,
        #[case] country: &str,
    ) {
        let _guard = lock_env([
            ("SYNTHETIC_DATA_SEED", None::<String>),
            ("SYNTHETIC_DATA_LOCALES", locales.map(str::to_owned)),
            ("SYNTHETIC_DATA_REF_DATE", None::<String>),
        ]);

        let mut generator = load_from_empty_args()
            .build_generator()
            .expect("loaded settings should build");
        assert_eq!(
            generator.location().default_country(),
            Ok(country.to_owned())
        );
    }

    #[test]
    fn comma_chains_inside_an_entry_are_split() {
        let settings = settings_for(&[" nb_NO , sk", "", "vi"]);
        assert_eq!(settings.locales(), vec!["nb_NO", "sk", "vi"]);
        assert_eq!(settings_for(&[" ", ""]).locales(), vec!["en"]);
    }

    #[test]
    fn unknown_locale_is_reported() {
        assert_eq!(
            settings_for(&["en", "xx"]).locale_chain(),
            Err(SettingsError::Locale {
                source: LocaleError::UnknownLocale {
                    code: "xx".to_owned()
                }
            })
        );
    }

    #[test]
    fn malformed_reference_date_is_reported() {
        let settings = GeneratorSettings {
            ref_date: Some("last tuesday".to_owned()),
            ..settings_for(&[])
        };
        assert!(matches!(
            settings.reference_date(),
            Err(SettingsError::InvalidReferenceDate { .. })
        ));
    }

    #[test]
    fn built_generator_honours_every_setting() {
        let settings = GeneratorSettings {
            seed: Some(1),
            locales: vec!["sk".to_owned()],
            ref_date: Some("2010-01-01T00:00:00+02:00".to_owned()),
        };
        let mut generator = settings.build_generator().expect("valid settings");

        assert_eq!(
            generator.location().default_country(),
            Ok("Slovensko".to_owned())
        );
        assert_eq!(generator.animal().cat(), Ok("Korat".to_owned()));
        assert_eq!(
            generator.default_ref_date(),
            Utc.with_ymd_and_hms(2009, 12, 31, 22, 0, 0)
                .single()
                .expect("valid timestamp")
        );
    }
}
