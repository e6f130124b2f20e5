//! Generator instances and their lifecycle.
//!
//! A [`Generator`] owns one [`Engine`] and shares one resolved locale tree.
//! Fork copies the engine by value; derive consumes a single draw and seeds a
//! fresh engine with it. Neither ever aliases engine state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::engine::Engine;
use crate::error::{ConfigurationError, RangeError};
use crate::locale::{LocaleDefinition, merge_locales};
use crate::modules::animal::AnimalModule;
use crate::modules::datatype::DatatypeModule;
use crate::modules::date::DateModule;
use crate::modules::helpers::HelpersModule;
use crate::modules::internet::InternetModule;
use crate::modules::location::LocationModule;
use crate::modules::number::NumberModule;
use crate::modules::person::PersonModule;
use crate::modules::string::StringModule;
use crate::modules::Context;
use crate::reference_date::ReferenceDate;
use crate::seed::Seed;

/// The locale data a generator reads from.
#[derive(Debug, Clone)]
pub enum LocaleSpec {
    /// One complete locale tree.
    Single(LocaleDefinition),
    /// Trees in precedence order, merged once at construction.
    Chain(Vec<LocaleDefinition>),
    /// An already resolved tree shared with other generators.
    Shared(Arc<LocaleDefinition>),
}

impl LocaleSpec {
    fn resolve(self) -> Result<Arc<LocaleDefinition>, ConfigurationError> {
        match self {
            Self::Single(definition) => Ok(Arc::new(definition)),
            Self::Chain(chain) => merge_locales(&chain).map(Arc::new),
            Self::Shared(definition) => Ok(definition),
        }
    }
}

impl From<LocaleDefinition> for LocaleSpec {
    fn from(definition: LocaleDefinition) -> Self {
        Self::Single(definition)
    }
}

impl From<Vec<LocaleDefinition>> for LocaleSpec {
    fn from(chain: Vec<LocaleDefinition>) -> Self {
        Self::Chain(chain)
    }
}

impl From<Arc<LocaleDefinition>> for LocaleSpec {
    fn from(definition: Arc<LocaleDefinition>) -> Self {
        Self::Shared(definition)
    }
}

/// Construction options for [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Locale data, merged if given as a chain.
    pub locale: LocaleSpec,
    /// Initial seed. A random seed is used when absent.
    pub seed: Option<Seed>,
    /// Default reference date. The system clock is used when absent.
    pub default_ref_date: Option<ReferenceDate>,
}

impl GeneratorOptions {
    /// Creates options for `locale` with a random seed and the system clock.
    #[must_use]
    pub fn new(locale: impl Into<LocaleSpec>) -> Self {
        Self {
            locale: locale.into(),
            seed: None,
            default_ref_date: None,
        }
    }

    /// Sets the initial seed.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Sets the default reference date.
    #[must_use]
    pub fn with_default_ref_date(mut self, source: impl Into<ReferenceDate>) -> Self {
        self.default_ref_date = Some(source.into());
        self
    }
}

/// A seeded, locale-aware source of synthetic values.
///
/// # Example
///
/// ```
/// use synthetic_data::{Generator, GeneratorOptions, LocaleId};
///
/// let chain = LocaleId::definitions(&LocaleId::NbNo.fallback_chain()).expect("bundled locales");
/// let mut generator =
///     Generator::new(GeneratorOptions::new(chain).with_seed(42_u32)).expect("valid options");
///
/// let mut replay = generator.fork();
/// assert_eq!(generator.number().int(0, 99), replay.number().int(0, 99));
/// assert_eq!(generator.location().default_country().expect("location data"), "Norge");
/// ```
#[derive(Debug)]
pub struct Generator {
    definitions: Arc<LocaleDefinition>,
    engine: Engine,
    reference: ReferenceDate,
}

impl Generator {
    /// Builds a generator, merging the locale chain once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyLocaleList`] for an empty locale
    /// chain and [`ConfigurationError::EmptySeedSequence`] for an empty seed
    /// sequence.
    pub fn new(options: GeneratorOptions) -> Result<Self, ConfigurationError> {
        let GeneratorOptions {
            locale,
            seed,
            default_ref_date,
        } = options;
        let locale_count = match &locale {
            LocaleSpec::Chain(chain) => chain.len(),
            LocaleSpec::Single(_) | LocaleSpec::Shared(_) => 1,
        };
        let definitions = locale.resolve()?;
        let mut generator = Self::from_parts(
            definitions,
            Engine::default(),
            default_ref_date.unwrap_or_default(),
        );
        let applied = match seed {
            Some(initial) => generator.seed(initial)?,
            None => generator.seed_randomly(),
        };
        debug!(locales = locale_count, seed = %applied, "generator constructed");
        Ok(generator)
    }

    const fn from_parts(
        definitions: Arc<LocaleDefinition>,
        engine: Engine,
        reference: ReferenceDate,
    ) -> Self {
        Self {
            definitions,
            engine,
            reference,
        }
    }

    /// Reseeds the engine and returns the seed that was applied.
    ///
    /// Values generated afterwards depend only on `seed` and the calls made
    /// since.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptySeedSequence`] for an empty
    /// sequence; the engine is then left unchanged.
    pub fn seed(&mut self, seed: impl Into<Seed>) -> Result<Seed, ConfigurationError> {
        let applied: Seed = seed.into();
        self.engine.seed(&applied)?;
        debug!(seed = %applied, "generator reseeded");
        Ok(applied)
    }

    /// Reseeds the engine from the operating system's randomness and returns
    /// the chosen seed so the run can be replayed.
    pub fn seed_randomly(&mut self) -> Seed {
        let value: u32 = rand::rng().random();
        self.engine.seed_single(value);
        debug!(seed = value, "generator reseeded randomly");
        Seed::Single(value)
    }

    /// Replaces the default reference date used by relative date generators.
    pub fn set_default_ref_date(&mut self, source: impl Into<ReferenceDate>) {
        self.reference = source.into();
    }

    /// Returns the current default reference date.
    #[must_use]
    pub fn default_ref_date(&self) -> DateTime<Utc> {
        self.reference.now()
    }

    /// Returns the resolved locale tree.
    #[must_use]
    pub fn definitions(&self) -> &LocaleDefinition {
        &self.definitions
    }

    /// Returns a generator with a copy of this generator's engine state.
    ///
    /// Parent and fork produce identical values for identical call sequences
    /// and never affect each other.
    #[must_use]
    pub fn fork(&self) -> Self {
        debug!(draws = self.engine.draws(), "generator forked");
        Self::from_parts(
            Arc::clone(&self.definitions),
            self.engine.fork(),
            self.reference.clone(),
        )
    }

    /// Returns a generator seeded from one draw of this generator's engine.
    ///
    /// The parent advances by exactly one draw. Nothing the derived generator
    /// does afterwards affects the parent.
    #[must_use]
    pub fn derive(&mut self) -> Self {
        let seed = self.engine.next_u32();
        debug!(seed, "generator derived");
        Self::from_parts(
            Arc::clone(&self.definitions),
            Engine::with_seed(seed),
            self.reference.clone(),
        )
    }

    /// Runs `generate` with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidProbability`] if `probability` is not
    /// within `[0, 1]`.
    pub fn maybe<T>(
        &mut self,
        probability: f64,
        generate: impl FnOnce(&mut Self) -> T,
    ) -> Result<Option<T>, RangeError> {
        if self.datatype().boolean(probability)? {
            Ok(Some(generate(self)))
        } else {
            Ok(None)
        }
    }

    /// Runs `generate` `count` times and collects the results.
    pub fn multiple<T>(&mut self, count: usize, mut generate: impl FnMut(&mut Self) -> T) -> Vec<T> {
        (0..count).map(|_| generate(self)).collect()
    }

    fn context(&mut self) -> Context<'_> {
        Context::new(&mut self.engine, &self.definitions, &self.reference)
    }

    /// Numbers.
    pub fn number(&mut self) -> NumberModule<'_> {
        NumberModule::new(self.context())
    }

    /// Booleans.
    pub fn datatype(&mut self) -> DatatypeModule<'_> {
        DatatypeModule::new(self.context())
    }

    /// Collection and pattern helpers.
    pub fn helpers(&mut self) -> HelpersModule<'_> {
        HelpersModule::new(self.context())
    }

    /// Strings and UUIDs.
    pub fn string(&mut self) -> StringModule<'_> {
        StringModule::new(self.context())
    }

    /// Passwords.
    pub fn internet(&mut self) -> InternetModule<'_> {
        InternetModule::new(self.context())
    }

    /// Dates and weekday names.
    pub fn date(&mut self) -> DateModule<'_> {
        DateModule::new(self.context())
    }

    /// Places.
    pub fn location(&mut self) -> LocationModule<'_> {
        LocationModule::new(self.context())
    }

    /// Names.
    pub fn person(&mut self) -> PersonModule<'_> {
        PersonModule::new(self.context())
    }

    /// Animal breeds.
    pub fn animal(&mut self) -> AnimalModule<'_> {
        AnimalModule::new(self.context())
    }

    /// Places, under their former name.
    #[deprecated(since = "0.1.0", note = "use `location()` instead")]
    pub fn address(&mut self) -> LocationModule<'_> {
        self.location()
    }

    /// Names, under their former name.
    #[deprecated(since = "0.1.0", note = "use `person()` instead")]
    pub fn name(&mut self) -> PersonModule<'_> {
        self.person()
    }
}
