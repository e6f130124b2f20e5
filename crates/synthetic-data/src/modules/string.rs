//! Random strings and identifiers.

use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid, Variant, Version};

use crate::error::RangeError;
use crate::modules::Context;
use crate::sampling::{CharClass, Sampler};

const UPPER_ALPHA: Alphabet = Alphabet::new(CharClass::Uppercase.alphabet());
const LOWER_ALPHA: Alphabet = Alphabet::new(CharClass::Lowercase.alphabet());
const MIXED_ALPHA: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");
const MIXED_ALPHANUMERIC: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789");
const UPPER_ALPHANUMERIC: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
const LOWER_ALPHANUMERIC: Alphabet = Alphabet::new(b"abcdefghijklmnopqrstuvwxyz0123456789");
const DIGITS: Alphabet = Alphabet::new(CharClass::Numeric.alphabet());
const SYMBOLS: Alphabet = Alphabet::new(CharClass::Symbol.alphabet());

/// A constant ASCII alphabet; an empty one fails const evaluation.
#[derive(Debug, Clone, Copy)]
struct Alphabet {
    bytes: &'static [u8],
    first: u8,
}

impl Alphabet {
    const fn new(bytes: &'static [u8]) -> Self {
        match bytes.first() {
            Some(first) => Self {
                bytes,
                first: *first,
            },
            None => panic!("alphabet must not be empty"),
        }
    }

    /// Draws one character with the same single draw as
    /// [`Sampler::char_from`]. A non-empty alphabet keeps the index in bounds.
    fn pick(self, sampler: &mut Sampler<'_>) -> char {
        let byte = sampler
            .index(self.bytes.len())
            .ok()
            .and_then(|index| self.bytes.get(index))
            .copied()
            .unwrap_or(self.first);
        char::from(byte)
    }
}

/// Letter casing for alphabetic strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// Uppercase letters only.
    Upper,
    /// Lowercase letters only.
    Lower,
    /// Both cases.
    #[default]
    Mixed,
}

/// String generators.
#[derive(Debug)]
pub struct StringModule<'g> {
    context: Context<'g>,
}

impl<'g> StringModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns `length` letters in the given casing.
    #[must_use]
    pub fn alpha(&mut self, length: usize, casing: Casing) -> String {
        let alphabet = match casing {
            Casing::Upper => UPPER_ALPHA,
            Casing::Lower => LOWER_ALPHA,
            Casing::Mixed => MIXED_ALPHA,
        };
        self.sample_from(alphabet, length)
    }

    /// Returns `length` letters and digits in the given casing.
    #[must_use]
    pub fn alphanumeric(&mut self, length: usize, casing: Casing) -> String {
        let alphabet = match casing {
            Casing::Upper => UPPER_ALPHANUMERIC,
            Casing::Lower => LOWER_ALPHANUMERIC,
            Casing::Mixed => MIXED_ALPHANUMERIC,
        };
        self.sample_from(alphabet, length)
    }

    /// Returns `length` decimal digits.
    #[must_use]
    pub fn numeric(&mut self, length: usize) -> String {
        self.sample_from(DIGITS, length)
    }

    /// Returns `length` symbol characters.
    #[must_use]
    pub fn symbol(&mut self, length: usize) -> String {
        self.sample_from(SYMBOLS, length)
    }

    /// Returns `length` characters drawn from `characters`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `characters` is empty and
    /// `length` is non-zero.
    pub fn from_characters(&mut self, characters: &str, length: usize) -> Result<String, RangeError> {
        let pool: Vec<char> = characters.chars().collect();
        let mut sampler = self.context.sampler();
        (0..length)
            .map(|_| sampler.array_element(&pool).copied())
            .collect()
    }

    /// Returns a version 4 UUID built from two 64-bit draws.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_data::{Generator, GeneratorOptions, LocaleId};
    ///
    /// let locale = LocaleId::Base.definition().expect("bundled locale");
    /// let mut first =
    ///     Generator::new(GeneratorOptions::new(locale.clone()).with_seed(1_u32)).expect("valid");
    /// let mut second =
    ///     Generator::new(GeneratorOptions::new(locale).with_seed(1_u32)).expect("valid");
    ///
    /// let id = first.string().uuid();
    /// assert_eq!(id.get_version_num(), 4);
    /// assert_eq!(id, second.string().uuid());
    /// ```
    #[must_use]
    pub fn uuid(&mut self) -> Uuid {
        let mut sampler = self.context.sampler();
        let high = u128::from(sampler.next_u64());
        let low = u128::from(sampler.next_u64());
        Builder::from_u128((high << 64) | low)
            .with_variant(Variant::RFC4122)
            .with_version(Version::Random)
            .into_uuid()
    }

    fn sample_from(&mut self, alphabet: Alphabet, length: usize) -> String {
        let mut sampler = self.context.sampler();
        (0..length).map(|_| alphabet.pick(&mut sampler)).collect()
    }
}
