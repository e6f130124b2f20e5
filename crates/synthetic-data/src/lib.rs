//! Deterministic, locale-aware synthetic data.
//!
//! A [`Generator`] combines a seeded [`Engine`] with a locale tree resolved
//! from one or more [`LocaleDefinition`]s. The same seed, locale chain, and
//! call sequence always produce the same values, on every platform.
//!
//! ```
//! use synthetic_data::{Generator, GeneratorOptions, LocaleId, PasswordMode};
//!
//! let chain = LocaleId::definitions(&LocaleId::Sk.fallback_chain()).expect("bundled locales");
//! let mut generator =
//!     Generator::new(GeneratorOptions::new(chain).with_seed(1_u32)).expect("valid options");
//!
//! assert_eq!(generator.animal().cat().expect("cat data"), "Korat");
//!
//! let mut derived = generator.derive();
//! let password = derived.internet().password(PasswordMode::Simple).expect("sampling");
//! assert!((4..=8).contains(&password.len()));
//! ```

pub mod engine;
pub mod error;
pub mod generator;
pub mod locale;
pub mod modules;
pub mod reference_date;
pub mod sampling;
pub mod seed;
pub mod settings;

pub use engine::{DEFAULT_SEED, Engine};
pub use error::{ConfigurationError, GenerationError, LocaleError, RangeError, SettingsError};
pub use generator::{Generator, GeneratorOptions, LocaleSpec};
pub use locale::{LocaleDefinition, LocaleId, merge_locales};
pub use modules::date::WeekdayOptions;
pub use modules::internet::{PasswordMode, PasswordOptions, PasswordSpec, Requirement};
pub use modules::string::Casing;
pub use reference_date::ReferenceDate;
pub use sampling::{CharClass, Sampler};
pub use seed::Seed;
pub use settings::GeneratorSettings;

#[cfg(test)]
pub(crate) mod test_support {
    //! Generators for unit tests.

    use crate::{Generator, GeneratorOptions, LocaleId};

    /// English generator with the base table as fallback.
    pub(crate) fn generator(seed: u32) -> Generator {
        generator_with_locale(LocaleId::En, seed)
    }

    /// Generator for `id` and its fallback chain.
    pub(crate) fn generator_with_locale(id: LocaleId, seed: u32) -> Generator {
        let chain = LocaleId::definitions(&id.fallback_chain()).expect("bundled locales");
        Generator::new(GeneratorOptions::new(chain).with_seed(seed)).expect("valid options")
    }
}
