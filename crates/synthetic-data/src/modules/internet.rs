//! Internet-related values.
//!
//! Password generation is the reference composite generator: requirements
//! are resolved up front into per-class minimums, the minimums are drawn in
//! class order, the buffer is padded with uniformly chosen classes, and the
//! result is shuffled.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::RangeError;
use crate::modules::Context;
use crate::sampling::{CharClass, Sampler};

/// Length range used by [`PasswordMode::Secure`].
const SECURE_LENGTH: (i64, i64) = (24, 64);

/// Length range used by [`PasswordMode::Simple`].
const SIMPLE_LENGTH: (i64, i64) = (4, 8);

/// Named password presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordMode {
    /// Every class required, 24 to 64 characters.
    Secure,
    /// One letter case and digits required, 4 to 8 characters.
    Simple,
}

/// How many characters of one class a password must contain.
///
/// `Flag(true)` requires one, `Flag(false)` none, and `AtLeast(n)` requires
/// `n`, with negative values read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    /// Whether the class is required at all.
    Flag(bool),
    /// Minimum count for the class.
    AtLeast(i64),
}

impl Requirement {
    /// Returns the minimum number of characters this requirement demands.
    #[must_use]
    pub fn minimum(self) -> usize {
        match self {
            Self::Flag(required) => usize::from(required),
            Self::AtLeast(count) => usize::try_from(count.max(0)).unwrap_or(usize::MAX),
        }
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for Requirement {
    fn from(required: bool) -> Self {
        Self::Flag(required)
    }
}

impl From<i64> for Requirement {
    fn from(count: i64) -> Self {
        Self::AtLeast(count)
    }
}

/// Explicit password requirements.
///
/// # Example
///
/// ```
/// use synthetic_data::{PasswordOptions, Requirement};
///
/// let options = PasswordOptions::new(10).with_symbol(2_i64).with_lowercase(true);
/// assert_eq!(options.include_symbol, Requirement::AtLeast(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    /// Target length.
    pub length: usize,
    /// Lowercase letter requirement.
    pub include_lowercase: Requirement,
    /// Uppercase letter requirement.
    pub include_uppercase: Requirement,
    /// Digit requirement.
    pub include_numeric: Requirement,
    /// Symbol requirement.
    pub include_symbol: Requirement,
}

impl PasswordOptions {
    /// Creates options for `length` characters with no class required.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            include_lowercase: Requirement::Flag(false),
            include_uppercase: Requirement::Flag(false),
            include_numeric: Requirement::Flag(false),
            include_symbol: Requirement::Flag(false),
        }
    }

    /// Sets the lowercase requirement.
    #[must_use]
    pub fn with_lowercase(mut self, requirement: impl Into<Requirement>) -> Self {
        self.include_lowercase = requirement.into();
        self
    }

    /// Sets the uppercase requirement.
    #[must_use]
    pub fn with_uppercase(mut self, requirement: impl Into<Requirement>) -> Self {
        self.include_uppercase = requirement.into();
        self
    }

    /// Sets the digit requirement.
    #[must_use]
    pub fn with_numeric(mut self, requirement: impl Into<Requirement>) -> Self {
        self.include_numeric = requirement.into();
        self
    }

    /// Sets the symbol requirement.
    #[must_use]
    pub fn with_symbol(mut self, requirement: impl Into<Requirement>) -> Self {
        self.include_symbol = requirement.into();
        self
    }
}

/// Either a named preset or explicit requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PasswordSpec {
    /// A named preset, expanded with fresh draws on every call.
    Mode(PasswordMode),
    /// Explicit requirements.
    Options(PasswordOptions),
}

impl From<PasswordMode> for PasswordSpec {
    fn from(mode: PasswordMode) -> Self {
        Self::Mode(mode)
    }
}

impl From<PasswordOptions> for PasswordSpec {
    fn from(options: PasswordOptions) -> Self {
        Self::Options(options)
    }
}

/// Requirements after mode expansion, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedPasswordOptions {
    length: usize,
    minimums: [(CharClass, usize); 4],
}

impl ResolvedPasswordOptions {
    fn resolve(spec: PasswordSpec, sampler: &mut Sampler<'_>) -> Result<Self, RangeError> {
        let options = match spec {
            PasswordSpec::Options(options) => options,
            PasswordSpec::Mode(PasswordMode::Secure) => {
                let length = draw_length(sampler, SECURE_LENGTH)?;
                PasswordOptions::new(length)
                    .with_lowercase(true)
                    .with_uppercase(true)
                    .with_numeric(true)
                    .with_symbol(true)
            }
            PasswordSpec::Mode(PasswordMode::Simple) => {
                let lowercase = sampler.boolean();
                let length = draw_length(sampler, SIMPLE_LENGTH)?;
                PasswordOptions::new(length)
                    .with_lowercase(lowercase)
                    .with_uppercase(!lowercase)
                    .with_numeric(true)
                    .with_symbol(false)
            }
        };
        Ok(Self {
            length: options.length,
            minimums: [
                (CharClass::Lowercase, options.include_lowercase.minimum()),
                (CharClass::Uppercase, options.include_uppercase.minimum()),
                (CharClass::Numeric, options.include_numeric.minimum()),
                (CharClass::Symbol, options.include_symbol.minimum()),
            ],
        })
    }
}

fn draw_length(sampler: &mut Sampler<'_>, (min, max): (i64, i64)) -> Result<usize, RangeError> {
    let length = sampler.int_in_range(min, max)?;
    usize::try_from(length).map_err(|_| RangeError::InvalidRange { min, max })
}

/// Internet value generators.
#[derive(Debug)]
pub struct InternetModule<'g> {
    context: Context<'g>,
}

impl<'g> InternetModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Generates a password.
    ///
    /// The result holds at least the minimum count of every required class
    /// and is exactly `length` characters long when the minimums fit. When
    /// the minimums add up to more than `length`, every required character
    /// is still emitted and the password is longer than requested.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] from the sampling primitives.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_data::{CharClass, Generator, GeneratorOptions, LocaleId, PasswordOptions};
    ///
    /// let locale = LocaleId::Base.definition().expect("bundled locale");
    /// let mut generator =
    ///     Generator::new(GeneratorOptions::new(locale).with_seed(1_u32)).expect("valid options");
    ///
    /// let password = generator
    ///     .internet()
    ///     .password(PasswordOptions::new(10).with_symbol(2_i64))
    ///     .expect("sampling");
    ///
    /// assert_eq!(password.chars().count(), 10);
    /// assert!(password.chars().filter(|c| CharClass::Symbol.contains(*c)).count() >= 2);
    /// ```
    pub fn password(&mut self, spec: impl Into<PasswordSpec>) -> Result<String, RangeError> {
        let mut sampler = self.context.sampler();
        let resolved = ResolvedPasswordOptions::resolve(spec.into(), &mut sampler)?;
        trace!(length = resolved.length, "generating password");

        let mut buffer = Vec::with_capacity(resolved.length);
        for (class, minimum) in resolved.minimums {
            for _ in 0..minimum {
                buffer.push(sampler.char_from_class(class)?);
            }
        }
        while buffer.len() < resolved.length {
            let class = *sampler.array_element(&CharClass::ALL)?;
            buffer.push(sampler.char_from_class(class)?);
        }
        sampler.shuffle(&mut buffer);
        Ok(buffer.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_support::generator;

    fn count(password: &str, class: CharClass) -> usize {
        password.chars().filter(|c| class.contains(*c)).count()
    }

    #[rstest]
    #[case(Requirement::Flag(true), 1)]
    #[case(Requirement::Flag(false), 0)]
    #[case(Requirement::AtLeast(4), 4)]
    #[case(Requirement::AtLeast(-3), 0)]
    fn requirements_normalise_to_minimums(#[case] requirement: Requirement, #[case] expected: usize) {
        assert_eq!(requirement.minimum(), expected);
    }

    #[test]
    fn explicit_options_resolve_without_draws() {
        let mut engine = crate::Engine::with_seed(1);
        let mut sampler = Sampler::new(&mut engine);
        let resolved = ResolvedPasswordOptions::resolve(
            PasswordOptions::new(12)
                .with_uppercase(3_i64)
                .with_numeric(true)
                .into(),
            &mut sampler,
        )
        .expect("sampling");

        assert_eq!(resolved.length, 12);
        assert_eq!(
            resolved.minimums,
            [
                (CharClass::Lowercase, 0),
                (CharClass::Uppercase, 3),
                (CharClass::Numeric, 1),
                (CharClass::Symbol, 0),
            ]
        );
        assert_eq!(engine.draws(), 0);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn simple_mode_requires_exactly_one_case(#[case] seed: u32) {
        let mut engine = crate::Engine::with_seed(seed);
        let mut sampler = Sampler::new(&mut engine);
        let resolved =
            ResolvedPasswordOptions::resolve(PasswordMode::Simple.into(), &mut sampler)
                .expect("sampling");

        let [(_, lower), (_, upper), (_, numeric), (_, symbol)] = resolved.minimums;
        assert_eq!(lower + upper, 1);
        assert_eq!((numeric, symbol), (1, 0));
        assert!((4..=8).contains(&resolved.length));
    }

    #[rstest]
    #[case(11)]
    #[case(12)]
    #[case(13)]
    #[case(14)]
    fn secure_mode_covers_every_class(#[case] seed: u32) {
        let mut generator = generator(seed);
        let password = generator
            .internet()
            .password(PasswordMode::Secure)
            .expect("sampling");

        assert!((24..=64).contains(&password.chars().count()));
        for class in CharClass::ALL {
            assert!(count(&password, class) >= 1, "{class:?} missing in {password}");
        }
    }

    #[test]
    fn symbol_minimum_and_length_hold() {
        let mut generator = generator(1);
        for _ in 0..200 {
            let password = generator
                .internet()
                .password(PasswordOptions::new(10).with_symbol(2_i64))
                .expect("sampling");
            assert_eq!(password.chars().count(), 10);
            assert!(count(&password, CharClass::Symbol) >= 2, "{password}");
        }
    }

    #[test]
    fn oversized_minimums_overflow_the_length() {
        let mut generator = generator(4);
        let password = generator
            .internet()
            .password(
                PasswordOptions::new(4)
                    .with_lowercase(3_i64)
                    .with_numeric(3_i64),
            )
            .expect("sampling");

        assert_eq!(password.chars().count(), 6);
        assert_eq!(count(&password, CharClass::Lowercase), 3);
        assert_eq!(count(&password, CharClass::Numeric), 3);
    }

    #[test]
    fn zero_length_without_requirements_is_empty() {
        let mut generator = generator(4);
        assert_eq!(
            generator.internet().password(PasswordOptions::new(0)),
            Ok(String::new())
        );
    }

    #[test]
    fn password_input_deserializes_from_mode_or_options() {
        let mode: PasswordSpec = serde_json::from_str("\"simple\"").expect("mode");
        let options: PasswordSpec =
            serde_json::from_str(r#"{"length": 8, "include_symbol": 2, "include_numeric": true}"#)
                .expect("options");

        assert_eq!(mode, PasswordSpec::Mode(PasswordMode::Simple));
        assert_eq!(
            options,
            PasswordSpec::Options(PasswordOptions::new(8).with_symbol(2_i64).with_numeric(true))
        );
    }
}
