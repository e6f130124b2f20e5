//! Primitive data types.

use crate::error::RangeError;
use crate::modules::Context;

/// Boolean generators.
#[derive(Debug)]
pub struct DatatypeModule<'g> {
    context: Context<'g>,
}

impl<'g> DatatypeModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns `true` with the given probability.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidProbability`] if `probability` is not
    /// within `[0, 1]`.
    pub fn boolean(&mut self, probability: f64) -> Result<bool, RangeError> {
        self.context.sampler().chance(probability)
    }
}
