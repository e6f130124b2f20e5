//! Sampling primitives layered on the engine.
//!
//! Every domain generator draws randomness through [`Sampler`], never from
//! the engine directly. Integer ranges use multiply-shift with rejection so
//! that every value in a range is equally likely.

use crate::engine::Engine;
use crate::error::RangeError;

/// Character classes used by string and password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII lowercase letters `a-z`.
    Lowercase,
    /// ASCII uppercase letters `A-Z`.
    Uppercase,
    /// ASCII digits `0-9`.
    Numeric,
    /// Punctuation symbols and space.
    Symbol,
}

impl CharClass {
    /// All classes in emission order.
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Numeric, Self::Symbol];

    /// Returns the fixed alphabet for this class.
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            Self::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Self::Numeric => b"0123456789",
            Self::Symbol => b"-#!$@%^&*()_+|~=`{}[]:\";'<>?,.\\/ ",
        }
    }

    /// Returns `true` if `c` belongs to this class.
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|byte| self.alphabet().contains(&byte))
    }
}

/// Random sampling over a borrowed engine.
///
/// # Example
///
/// ```
/// use synthetic_data::{Engine, Sampler};
///
/// let mut engine = Engine::with_seed(1);
/// let mut sampler = Sampler::new(&mut engine);
///
/// let value = sampler.int_in_range(1, 6).expect("valid range");
/// assert!((1..=6).contains(&value));
/// ```
#[derive(Debug)]
pub struct Sampler<'a> {
    engine: &'a mut Engine,
}

impl<'a> Sampler<'a> {
    /// Wraps `engine` for sampling.
    pub const fn new(engine: &'a mut Engine) -> Self {
        Self { engine }
    }

    /// Returns a uniformly distributed integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `max < min`.
    pub fn int_in_range(&mut self, min: i64, max: i64) -> Result<i64, RangeError> {
        if max < min {
            return Err(RangeError::InvalidRange { min, max });
        }
        let span = max.abs_diff(min);
        let offset = match span.checked_add(1) {
            Some(bound) => self.below(bound),
            None => self.next_u64(),
        };
        Ok(min.wrapping_add_unsigned(offset))
    }

    /// Returns a uniformly distributed index in `[0, len)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `len` is zero.
    pub fn index(&mut self, len: usize) -> Result<usize, RangeError> {
        let bound = u64::try_from(len).map_err(|_| RangeError::EmptyDataset)?;
        if bound == 0 {
            return Err(RangeError::EmptyDataset);
        }
        usize::try_from(self.below(bound)).map_err(|_| RangeError::EmptyDataset)
    }

    /// Returns a uniformly distributed float in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidFloatRange`] if either bound is not
    /// finite or `max < min`.
    #[expect(
        clippy::float_arithmetic,
        reason = "scaling a unit float into a range requires float arithmetic"
    )]
    pub fn float_in_range(&mut self, min: f64, max: f64) -> Result<f64, RangeError> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(RangeError::InvalidFloatRange);
        }
        let unit = self.engine.next_f64();
        Ok((max - min).mul_add(unit, min))
    }

    /// Returns `true` or `false` with equal probability.
    pub fn boolean(&mut self) -> bool {
        self.below(2) == 1
    }

    /// Returns `true` with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidProbability`] if `probability` is not
    /// within `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> Result<bool, RangeError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RangeError::InvalidProbability);
        }
        Ok(self.engine.next_f64() < probability)
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `items` is empty.
    pub fn array_element<'t, T>(&mut self, items: &'t [T]) -> Result<&'t T, RangeError> {
        let position = self.index(items.len())?;
        items.get(position).ok_or(RangeError::EmptyDataset)
    }

    /// Picks one value with probability proportional to its weight.
    ///
    /// A single draw over the total weight selects the first entry whose
    /// cumulative weight exceeds it, so ties resolve in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `entries` is empty and
    /// [`RangeError::InvalidWeights`] if all weights are zero.
    pub fn weighted_element<'t, T>(&mut self, entries: &'t [(T, u32)]) -> Result<&'t T, RangeError> {
        if entries.is_empty() {
            return Err(RangeError::EmptyDataset);
        }
        let total: u64 = entries.iter().map(|(_, weight)| u64::from(*weight)).sum();
        if total == 0 {
            return Err(RangeError::InvalidWeights);
        }
        let target = self.below(total);
        let mut cumulative = 0_u64;
        for (value, weight) in entries {
            cumulative += u64::from(*weight);
            if target < cumulative {
                return Ok(value);
            }
        }
        Err(RangeError::InvalidWeights)
    }

    /// Shuffles `items` in place with Fisher–Yates.
    ///
    /// Each position from the last down to the second takes one fresh index
    /// draw, so every permutation is equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for position in (1..items.len()).rev() {
            let bound = u64::try_from(position).map_or(u64::MAX, |p| p.saturating_add(1));
            let swap_with = usize::try_from(self.below(bound)).unwrap_or(position);
            items.swap(position, swap_with);
        }
    }

    /// Picks one character uniformly from `class`.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] from element selection.
    pub fn char_from_class(&mut self, class: CharClass) -> Result<char, RangeError> {
        self.char_from(class.alphabet())
    }

    /// Picks one character uniformly from an ASCII `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `alphabet` is empty.
    pub fn char_from(&mut self, alphabet: &[u8]) -> Result<char, RangeError> {
        self.array_element(alphabet).map(|byte| char::from(*byte))
    }

    /// Returns a 64-bit value built from two draws, high word first.
    pub fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.engine.next_u32());
        let low = u64::from(self.engine.next_u32());
        (high << 32) | low
    }

    /// Returns a uniform value in `[0, bound)`; `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64 {
        match u32::try_from(bound) {
            Ok(narrow) => u64::from(self.below_u32(narrow)),
            Err(_) => self.below_u64(bound),
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        reason = "rejection threshold is a remainder; truncation splits the product into words"
    )]
    fn below_u32(&mut self, bound: u32) -> u32 {
        let mut product = u64::from(self.engine.next_u32()) * u64::from(bound);
        let mut low = product as u32;
        if low < bound {
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                product = u64::from(self.engine.next_u32()) * u64::from(bound);
                low = product as u32;
            }
        }
        (product >> 32) as u32
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        reason = "rejection threshold is a remainder; truncation splits the product into words"
    )]
    fn below_u64(&mut self, bound: u64) -> u64 {
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let product = u128::from(self.next_u64()) * u128::from(bound);
            if product as u64 >= threshold {
                return (product >> 64) as u64;
            }
        }
    }
}
