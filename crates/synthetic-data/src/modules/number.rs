//! Numbers.

use crate::error::RangeError;
use crate::modules::Context;

/// Numeric generators.
#[derive(Debug)]
pub struct NumberModule<'g> {
    context: Context<'g>,
}

impl<'g> NumberModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns an integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `max < min`.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_data::{Generator, GeneratorOptions, LocaleId};
    ///
    /// let locale = LocaleId::En.definition().expect("bundled locale");
    /// let mut generator =
    ///     Generator::new(GeneratorOptions::new(locale).with_seed(7_u32)).expect("valid options");
    /// let roll = generator.number().int(1, 6).expect("valid range");
    /// assert!((1..=6).contains(&roll));
    /// ```
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64, RangeError> {
        self.context.sampler().int_in_range(min, max)
    }

    /// Returns a float in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidFloatRange`] if either bound is not
    /// finite or `max < min`.
    pub fn float(&mut self, min: f64, max: f64) -> Result<f64, RangeError> {
        self.context.sampler().float_in_range(min, max)
    }
}
