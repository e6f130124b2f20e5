//! Generator namespaces.
//!
//! Each namespace is a short-lived view over one generator's engine, locale
//! tree, and reference date. Namespaces draw randomness only through
//! [`Sampler`](crate::Sampler) and read data only through the locale tree.

pub mod animal;
pub mod datatype;
pub mod date;
pub mod helpers;
pub mod internet;
pub mod location;
pub mod number;
pub mod person;
pub mod string;

use serde_json::Value;

use crate::engine::Engine;
use crate::error::GenerationError;
use crate::locale::{Entries, LocaleDefinition};
use crate::reference_date::ReferenceDate;
use crate::sampling::Sampler;

/// Borrowed generator state shared by every namespace.
#[derive(Debug)]
pub(crate) struct Context<'g> {
    engine: &'g mut Engine,
    definitions: &'g LocaleDefinition,
    reference: &'g ReferenceDate,
}

impl<'g> Context<'g> {
    pub(crate) const fn new(
        engine: &'g mut Engine,
        definitions: &'g LocaleDefinition,
        reference: &'g ReferenceDate,
    ) -> Self {
        Self {
            engine,
            definitions,
            reference,
        }
    }

    pub(crate) const fn sampler(&mut self) -> Sampler<'_> {
        Sampler::new(&mut *self.engine)
    }

    pub(crate) const fn definitions(&self) -> &'g LocaleDefinition {
        self.definitions
    }

    pub(crate) const fn reference(&self) -> &'g ReferenceDate {
        self.reference
    }

    /// Reads one text value from `path`.
    ///
    /// A string leaf is returned as is. A list is sampled uniformly, or by
    /// weight when its entries carry weights.
    pub(crate) fn pick_text(&mut self, path: &str) -> Result<String, GenerationError> {
        let definitions = self.definitions;
        if let Value::String(text) = definitions.require(path)? {
            return Ok(text.clone());
        }
        let mut sampler = self.sampler();
        let picked = match definitions.require_entries(path)? {
            Entries::Plain(items) => *sampler.array_element(&items)?,
            Entries::Weighted(entries) => *sampler.weighted_element(&entries)?,
        };
        Ok(picked.to_owned())
    }
}
