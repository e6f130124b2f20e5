//! People.

use crate::error::GenerationError;
use crate::modules::Context;

/// Person name generators backed by `person.*` locale data.
#[derive(Debug)]
pub struct PersonModule<'g> {
    context: Context<'g>,
}

impl<'g> PersonModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns a given name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `person.first_name` is undefined.
    pub fn first_name(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("person.first_name")
    }

    /// Returns a family name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `person.last_name` is undefined.
    pub fn last_name(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("person.last_name")
    }

    /// Returns a given name and a family name joined by a space.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if either name list is undefined.
    pub fn full_name(&mut self) -> Result<String, GenerationError> {
        let first = self.first_name()?;
        let last = self.last_name()?;
        Ok(format!("{first} {last}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::LocaleId;
    use crate::test_support::{generator, generator_with_locale};

    #[test]
    fn full_name_has_two_parts() {
        let mut generator = generator(12);
        let name = generator.person().full_name().expect("name data");
        assert_eq!(name.split(' ').count(), 2, "{name}");
    }

    #[test]
    fn weighted_last_names_resolve() {
        let mut generator = generator(12);
        for _ in 0..50 {
            let last = generator.person().last_name().expect("name data");
            assert!(!last.is_empty());
        }
    }

    #[test]
    fn names_follow_the_primary_locale() {
        let mut generator = generator_with_locale(LocaleId::Es, 12);
        let first = generator.person().first_name().expect("name data");
        assert!(
            ["Alejandro", "Carmen", "Diego", "Lucía", "Marta", "Pablo"].contains(&first.as_str())
        );
    }
}
