//! Places.

use crate::error::GenerationError;
use crate::modules::Context;

/// Location generators backed by `location.*` locale data.
#[derive(Debug)]
pub struct LocationModule<'g> {
    context: Context<'g>,
}

impl<'g> LocationModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns a city name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if no locale in the chain defines
    /// `location.city_name`.
    pub fn city_name(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("location.city_name")
    }

    /// Returns a country name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `location.country` is undefined.
    pub fn country(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("location.country")
    }

    /// Returns a state or region name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `location.state` is undefined.
    pub fn state(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("location.state")
    }

    /// Returns the locale's home country.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `location.default_country` is
    /// undefined.
    pub fn default_country(&mut self) -> Result<String, GenerationError> {
        self.context.pick_text("location.default_country")
    }
}
