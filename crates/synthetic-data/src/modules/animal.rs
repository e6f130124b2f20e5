//! Animals.

use crate::error::GenerationError;
use crate::modules::Context;

/// Animal generators backed by `animal.*` locale data.
#[derive(Debug)]
pub struct AnimalModule<'g> {
    context: Context<'g>,
}

impl<'g> AnimalModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns a cat breed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `animal.cat` is undefined.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_data::{Generator, GeneratorOptions, LocaleId};
    ///
    /// let locale = LocaleId::En.definition().expect("bundled locale");
    /// let mut generator =
    ///     Generator::new(GeneratorOptions::new(locale).with_seed(1_u32)).expect("valid options");
    /// assert_eq!(generator.animal().cat().expect("cat data"), "Korat");
    /// ```
    pub fn cat(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("animal.cat")
    }

    /// Returns a dog breed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `animal.dog` is undefined.
    pub fn dog(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("animal.dog")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::Seed;
    use crate::test_support::generator;

    #[rstest]
    #[case(Seed::Single(1), "Korat")]
    #[case(Seed::Sequence(vec![1, 2, 3]), "Oriental")]
    fn seeded_cats_are_stable(#[case] seed: Seed, #[case] expected: &str) {
        let mut generator = generator(0);
        generator.seed(seed).expect("non-empty seed");
        assert_eq!(generator.animal().cat(), Ok(expected.to_owned()));
    }

    #[test]
    fn dogs_are_available() {
        let mut generator = generator(0);
        assert!(generator.animal().dog().is_ok());
    }
}
