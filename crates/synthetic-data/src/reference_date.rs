//! Reference date sources for relative date generation.
//!
//! Relative date generators (`recent`, `soon`, `past`, `future`) measure
//! from a reference instant. A [`ReferenceDate`] wraps a
//! [`mockable::Clock`] and is queried on every call, so a source backed by
//! the system clock moves with time while a fixed source never does.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};

/// Source of the default reference instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use synthetic_data::ReferenceDate;
///
/// let instant = Utc
///     .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
///     .single()
///     .expect("valid timestamp");
/// let source = ReferenceDate::fixed(instant);
/// assert_eq!(source.now(), instant);
/// ```
#[derive(Clone)]
pub struct ReferenceDate {
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ReferenceDate {
    /// Reads the current system time on every query.
    #[must_use]
    pub fn system() -> Self {
        Self::from_clock(DefaultClock)
    }

    /// Always returns `instant`.
    #[must_use]
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::from_clock(FixedClock(instant))
    }

    /// Calls `source` on every query.
    #[must_use]
    pub fn from_fn<F>(source: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self::from_clock(FnClock(source))
    }

    /// Wraps any clock implementation.
    #[must_use]
    pub fn from_clock<C>(clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Returns the current reference instant.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}

impl Default for ReferenceDate {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for ReferenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceDate").finish_non_exhaustive()
    }
}

impl From<DateTime<Utc>> for ReferenceDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::fixed(instant)
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

struct FnClock<F>(F);

impl<F> Clock for FnClock<F>
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        (self.0)()
    }
}
