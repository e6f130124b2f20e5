//! Collection and pattern helpers.

use crate::error::RangeError;
use crate::modules::Context;
use crate::sampling::CharClass;

/// Helpers over caller-supplied collections and patterns.
#[derive(Debug)]
pub struct HelpersModule<'g> {
    context: Context<'g>,
}

impl<'g> HelpersModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `items` is empty.
    pub fn array_element<'t, T>(&mut self, items: &'t [T]) -> Result<&'t T, RangeError> {
        self.context.sampler().array_element(items)
    }

    /// Picks one value with probability proportional to its weight.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EmptyDataset`] if `entries` is empty and
    /// [`RangeError::InvalidWeights`] if every weight is zero.
    pub fn weighted_array_element<'t, T>(
        &mut self,
        entries: &'t [(T, u32)],
    ) -> Result<&'t T, RangeError> {
        self.context.sampler().weighted_element(entries)
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        self.context.sampler().shuffle(items);
    }

    /// Returns a shuffled copy of `items`.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy);
        copy
    }

    /// Returns `count` distinct positions of `items` in random order.
    ///
    /// A `count` larger than `items` is capped at its length.
    pub fn array_elements<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut picked = self.shuffled(items);
        picked.truncate(count);
        picked
    }

    /// Returns between `min` and `max` distinct positions of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `max < min`.
    pub fn array_elements_between<T: Clone>(
        &mut self,
        items: &[T],
        min: usize,
        max: usize,
    ) -> Result<Vec<T>, RangeError> {
        let low = i64::try_from(min).unwrap_or(i64::MAX);
        let high = i64::try_from(max).unwrap_or(i64::MAX);
        let count = self.context.sampler().int_in_range(low, high)?;
        Ok(self.array_elements(items, usize::try_from(count).unwrap_or(usize::MAX)))
    }

    /// Replaces placeholder symbols in `pattern`.
    ///
    /// `#` becomes a digit, `?` an uppercase letter, and `*` either of the
    /// two chosen by a fair coin. Other characters are copied.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] from character sampling.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_data::{Generator, GeneratorOptions, LocaleId};
    ///
    /// let locale = LocaleId::Base.definition().expect("bundled locale");
    /// let mut generator =
    ///     Generator::new(GeneratorOptions::new(locale).with_seed(3_u32)).expect("valid options");
    /// let plate = generator.helpers().replace_symbols("??-####").expect("sampling");
    /// assert_eq!(plate.len(), 7);
    /// assert_eq!(plate.chars().nth(2), Some('-'));
    /// ```
    pub fn replace_symbols(&mut self, pattern: &str) -> Result<String, RangeError> {
        let mut sampler = self.context.sampler();
        pattern
            .chars()
            .map(|c| match c {
                '#' => sampler.char_from_class(CharClass::Numeric),
                '?' => sampler.char_from_class(CharClass::Uppercase),
                '*' => {
                    let class = if sampler.boolean() {
                        CharClass::Uppercase
                    } else {
                        CharClass::Numeric
                    };
                    sampler.char_from_class(class)
                }
                other => Ok(other),
            })
            .collect()
    }
}
