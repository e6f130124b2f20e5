//! Dates and calendar names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, RangeError};
use crate::modules::Context;

const MILLIS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_YEAR: i64 = 365;

/// Options for [`DateModule::weekday`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdayOptions {
    /// Use the abbreviated names.
    pub abbreviated: bool,
    /// Prefer the names used inside a sentence, when the locale has them.
    pub context: bool,
}

/// Date generators.
///
/// Relative generators take an optional reference instant and fall back to
/// the generator's default reference date, read fresh on every call.
#[derive(Debug)]
pub struct DateModule<'g> {
    context: Context<'g>,
}

impl<'g> DateModule<'g> {
    pub(crate) const fn new(context: Context<'g>) -> Self {
        Self { context }
    }

    /// Returns an instant in `[from, to]` with millisecond resolution.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `to` is before `from`.
    pub fn between(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, RangeError> {
        self.between_millis(from.timestamp_millis(), to.timestamp_millis())
    }

    /// Returns an instant within `days` days before the reference date.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `days` is zero.
    pub fn recent(
        &mut self,
        days: u32,
        ref_date: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, RangeError> {
        let span = i64::from(days).saturating_mul(MILLIS_PER_DAY);
        self.before_reference(span, ref_date)
    }

    /// Returns an instant within `days` days after the reference date.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `days` is zero.
    pub fn soon(
        &mut self,
        days: u32,
        ref_date: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, RangeError> {
        let span = i64::from(days).saturating_mul(MILLIS_PER_DAY);
        self.after_reference(span, ref_date)
    }

    /// Returns an instant within `years` years before the reference date.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `years` is zero.
    pub fn past(
        &mut self,
        years: u32,
        ref_date: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, RangeError> {
        let span = i64::from(years).saturating_mul(DAYS_PER_YEAR * MILLIS_PER_DAY);
        self.before_reference(span, ref_date)
    }

    /// Returns an instant within `years` years after the reference date.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if `years` is zero.
    pub fn future(
        &mut self,
        years: u32,
        ref_date: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, RangeError> {
        let span = i64::from(years).saturating_mul(DAYS_PER_YEAR * MILLIS_PER_DAY);
        self.after_reference(span, ref_date)
    }

    /// Returns a weekday name from `date.weekday`.
    ///
    /// Context lists (`wide_context`, `abbr_context`) are used when requested
    /// and present; otherwise the plain list is used.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the locale has no weekday names.
    ///
    /// # Example
    ///
    /// ```
    /// use synthetic_data::{Generator, GeneratorOptions, LocaleId, WeekdayOptions};
    ///
    /// let locale = LocaleId::Es.definition().expect("bundled locale");
    /// let mut generator =
    ///     Generator::new(GeneratorOptions::new(locale).with_seed(2_u32)).expect("valid options");
    ///
    /// let day = generator
    ///     .date()
    ///     .weekday(WeekdayOptions { abbreviated: true, context: true })
    ///     .expect("weekday data");
    /// assert!(day.ends_with('.'));
    /// ```
    pub fn weekday(&mut self, options: WeekdayOptions) -> Result<String, GenerationError> {
        let base = if options.abbreviated {
            "date.weekday.abbr"
        } else {
            "date.weekday.wide"
        };
        let contextual = format!("{base}_context");
        let path = if options.context && self.context.definitions().get(&contextual).is_some() {
            contextual.as_str()
        } else {
            base
        };
        self.context.pick_text(path)
    }

    fn reference(&self, ref_date: Option<DateTime<Utc>>) -> i64 {
        ref_date
            .unwrap_or_else(|| self.context.reference().now())
            .timestamp_millis()
    }

    fn before_reference(
        &mut self,
        span: i64,
        ref_date: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, RangeError> {
        let reference = self.reference(ref_date);
        self.between_millis(reference.saturating_sub(span), reference.saturating_sub(1))
    }

    fn after_reference(
        &mut self,
        span: i64,
        ref_date: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>, RangeError> {
        let reference = self.reference(ref_date);
        self.between_millis(reference.saturating_add(1), reference.saturating_add(span))
    }

    fn between_millis(&mut self, min: i64, max: i64) -> Result<DateTime<Utc>, RangeError> {
        let millis = self.context.sampler().int_in_range(min, max)?;
        DateTime::from_timestamp_millis(millis).ok_or(RangeError::InvalidRange { min, max })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::test_support::{generator, generator_with_locale};
    use crate::{Generator, GeneratorOptions, LocaleId};

    #[fixture]
    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn seeded(reference: DateTime<Utc>) -> Generator {
        let mut generator = generator(21);
        generator.set_default_ref_date(reference);
        generator
    }

    #[rstest]
    fn between_stays_inside_bounds(mut seeded: Generator, reference: DateTime<Utc>) {
        let to = reference + TimeDelta::hours(1);
        for _ in 0..200 {
            let value = seeded.date().between(reference, to).expect("valid range");
            assert!((reference..=to).contains(&value));
        }
    }

    #[rstest]
    fn between_rejects_reversed_bounds(mut seeded: Generator, reference: DateTime<Utc>) {
        let earlier = reference - TimeDelta::days(1);
        assert!(seeded.date().between(reference, earlier).is_err());
    }

    #[rstest]
    fn relative_dates_use_the_default_reference(mut seeded: Generator, reference: DateTime<Utc>) {
        for _ in 0..100 {
            let recent = seeded.date().recent(3, None).expect("non-zero span");
            let soon = seeded.date().soon(3, None).expect("non-zero span");
            let past = seeded.date().past(2, None).expect("non-zero span");
            let future = seeded.date().future(2, None).expect("non-zero span");

            assert!((reference - TimeDelta::days(3)..reference).contains(&recent));
            assert!((reference + TimeDelta::milliseconds(1)..=reference + TimeDelta::days(3)).contains(&soon));
            assert!((reference - TimeDelta::days(730)..reference).contains(&past));
            assert!((reference + TimeDelta::milliseconds(1)..=reference + TimeDelta::days(730)).contains(&future));
        }
    }

    #[rstest]
    fn explicit_reference_overrides_the_default(mut seeded: Generator, reference: DateTime<Utc>) {
        let elsewhere = reference + TimeDelta::days(1_000);
        let value = seeded.date().recent(1, Some(elsewhere)).expect("non-zero span");
        assert!((elsewhere - TimeDelta::days(1)..elsewhere).contains(&value));
    }

    #[rstest]
    fn zero_span_is_rejected(mut seeded: Generator) {
        assert!(seeded.date().recent(0, None).is_err());
        assert!(seeded.date().future(0, None).is_err());
    }

    const WIDE: [&str; 7] = ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"];
    const ABBR: [&str; 7] = ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"];
    const ABBR_CONTEXT: [&str; 7] = ["dom.", "lun.", "mart.", "miérc.", "juev.", "vier.", "sáb."];

    #[rstest]
    #[case(false, false, &WIDE)]
    #[case(true, false, &ABBR)]
    #[case(true, true, &ABBR_CONTEXT)]
    #[case(false, true, &WIDE)]
    fn weekday_reads_the_requested_list(
        #[case] abbreviated: bool,
        #[case] context: bool,
        #[case] expected: &[&str],
    ) {
        let mut generator = generator_with_locale(LocaleId::Es, 6);
        let options = WeekdayOptions { abbreviated, context };
        for _ in 0..30 {
            let day = generator.date().weekday(options).expect("weekday data");
            assert!(expected.contains(&day.as_str()), "{day}");
        }
    }

    #[test]
    fn weekday_without_data_names_the_missing_path() {
        let base = LocaleId::Base.definition().expect("bundled locale");
        let mut generator =
            Generator::new(GeneratorOptions::new(base).with_seed(6_u32)).expect("valid options");
        assert_eq!(
            generator.date().weekday(WeekdayOptions::default()),
            Err(GenerationError::from(crate::error::LocaleError::MissingDefinition {
                path: "date.weekday.wide".to_owned()
            }))
        );
    }
}
