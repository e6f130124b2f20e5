//! Error types for the synthetic-data crate.
//!
//! This module defines semantic error enums for generator configuration,
//! sampling, locale data access, and settings, following the project's error handling
//! conventions with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a generator or its engine.
///
/// These are caller programming errors: they are surfaced synchronously and
/// never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The locale chain supplied for merging was empty.
    #[error("the locale option must contain at least one locale definition")]
    EmptyLocaleList,

    /// A sequence seed was supplied without any values.
    #[error("a seed sequence must contain at least one value")]
    EmptySeedSequence,
}

/// Errors raised by the sampling primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The requested integer range has its bounds reversed.
    #[error("invalid range: max ({max}) must not be less than min ({min})")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// The requested float range is reversed or not finite.
    #[error("invalid float range: bounds must be finite with min <= max")]
    InvalidFloatRange,

    /// A value was requested from an empty collection.
    #[error("cannot get value from empty dataset")]
    EmptyDataset,

    /// Weighted selection was requested over entries whose weights sum to zero.
    #[error("weighted entries must have a positive total weight")]
    InvalidWeights,

    /// A probability outside `[0, 1]` was supplied.
    #[error("probability must be within [0, 1]")]
    InvalidProbability,
}

/// Errors raised while loading or reading locale definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A locale file could not be read.
    #[error("failed to read locale file at '{path}': {message}")]
    IoError {
        /// Path to the locale file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Locale JSON is malformed.
    #[error("invalid locale JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// Locale JSON parsed, but its root is not an object.
    #[error("locale definition root must be a JSON object")]
    NotAnObject,

    /// The resolved locale tree has no data at the requested path.
    #[error(
        "the locale data for '{path}' are missing in this locale; \
         add a fallback locale that defines it"
    )]
    MissingDefinition {
        /// Dot-separated path that was requested.
        path: String,
    },

    /// The data at the requested path has an unsupported shape.
    #[error("the locale data for '{path}' must be a string or a list of entries")]
    InvalidEntry {
        /// Dot-separated path that was requested.
        path: String,
    },

    /// No bundled locale uses the requested code.
    #[error("unknown locale code '{code}'")]
    UnknownLocale {
        /// Locale code that was not recognised.
        code: String,
    },
}

/// Errors raised by domain generators that read locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Sampling over the locale data failed.
    #[error("sampling error: {source}")]
    Range {
        /// Underlying sampling error.
        #[from]
        #[source]
        source: RangeError,
    },

    /// The locale data could not be resolved.
    #[error("locale error: {source}")]
    Locale {
        /// Underlying locale error.
        #[from]
        #[source]
        source: LocaleError,
    },
}

/// Errors raised while turning configuration into a generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Configuration could not be loaded from the environment or files.
    #[error("failed to load settings: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },

    /// The configured reference date is not RFC 3339.
    #[error("invalid reference date '{value}': {message}")]
    InvalidReferenceDate {
        /// Configured value.
        value: String,
        /// Description of the parse error.
        message: String,
    },

    /// A configured locale code is not bundled.
    #[error("locale error: {source}")]
    Locale {
        /// Underlying locale error.
        #[from]
        source: LocaleError,
    },

    /// The generator rejected the resolved configuration.
    #[error("configuration error: {source}")]
    Configuration {
        /// Underlying configuration error.
        #[from]
        source: ConfigurationError,
    },
}
