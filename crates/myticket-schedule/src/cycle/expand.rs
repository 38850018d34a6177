//! Expansion of recurrence rules into calendar dates.
//!
//! Every live strategy shares one skeleton: pick an anchor date, then emit
//! `anchor + n * step` for `n = 0, 1, 2, ...` until a candidate passes the end
//! bound. Offsets are always taken from the anchor, never from the previous
//! occurrence, so month-end clamping does not drift: a monthly series from
//! Jan 31 yields Feb 28 and then Mar 31 again.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use super::rule::{Pattern, RecurrenceRule};
use super::tag::{StepUnit, Tag};

/// ## Summary
/// Expands a rule into its ascending, de-duplicated occurrence dates.
///
/// Degenerate rules (missing or inverted bounds, models without a strategy)
/// produce an empty vector. An unrecognized step unit produces just the start
/// date.
#[must_use]
pub fn expand(rule: &RecurrenceRule) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = rule.occurrences().collect();
    tracing::trace!(
        model = rule.pattern.model_name(),
        count = dates.len(),
        "Expanded recurrence rule"
    );
    dates
}

impl RecurrenceRule {
    /// ## Summary
    /// Returns a lazy iterator over the rule's occurrence dates.
    ///
    /// The iterator borrows nothing from the rule; calling this again starts
    /// a fresh, identical sequence.
    #[must_use]
    pub fn occurrences(&self) -> Occurrences {
        Occurrences {
            cursor: Cursor::for_rule(self),
        }
    }
}

/// Iterator over the dates of a [`RecurrenceRule`].
#[derive(Debug, Clone)]
pub struct Occurrences {
    cursor: Option<Cursor>,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let cursor = self.cursor.as_mut()?;
        match cursor.candidate() {
            Some(date) if date <= cursor.end => {
                cursor.index = cursor.index.saturating_add(1);
                Some(date)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}

impl FusedIterator for Occurrences {}

/// Distance between consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cadence {
    DayStep(u64),
    MonthStep(u64),
    /// Only the anchor fires.
    Single,
}

impl Cadence {
    fn for_unit(unit: &Tag<StepUnit>, count: u64) -> Self {
        match unit.get() {
            Some(StepUnit::Day) => Self::DayStep(count),
            Some(StepUnit::Week) => Self::DayStep(count.saturating_mul(7)),
            Some(StepUnit::Month) => Self::MonthStep(count),
            Some(StepUnit::Year) => Self::MonthStep(count.saturating_mul(12)),
            None => {
                tracing::trace!(
                    unit = ?unit,
                    "Unrecognized step unit, series stops after its start date"
                );
                Self::Single
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Cursor {
    anchor: NaiveDate,
    end: NaiveDate,
    cadence: Cadence,
    index: u64,
}

impl Cursor {
    fn for_rule(rule: &RecurrenceRule) -> Option<Self> {
        let Some((start, end)) = rule.bounds() else {
            tracing::trace!("Recurrence rule is missing a bound");
            return None;
        };
        if end < start {
            tracing::trace!(%start, %end, "Recurrence rule ends before it starts");
            return None;
        }

        let (anchor, cadence) = match &rule.pattern {
            Pattern::Each { unit } => (start, Cadence::for_unit(unit, 1)),
            Pattern::Every { count, unit } => {
                (start, Cadence::for_unit(unit, u64::from(count.get())))
            }
            Pattern::DayOfWeek { weekday } => {
                (weekday_anchor(start, weekday)?, Cadence::DayStep(7))
            }
            Pattern::MonthsOfYear { .. }
            | Pattern::FirstLastOf
            | Pattern::DayOfMonth
            | Pattern::Unrecognized(_) => {
                tracing::trace!(
                    model = rule.pattern.model_name(),
                    "No expansion strategy for model"
                );
                return None;
            }
        };

        Some(Self {
            anchor,
            end,
            cadence,
            index: 0,
        })
    }

    /// The `index`-th occurrence, or `None` once the offset leaves chrono's range.
    fn candidate(&self) -> Option<NaiveDate> {
        match self.cadence {
            Cadence::DayStep(step) => {
                let offset = self.index.checked_mul(step)?;
                self.anchor.checked_add_days(Days::new(offset))
            }
            Cadence::MonthStep(step) => {
                let offset = u32::try_from(self.index.checked_mul(step)?).ok()?;
                self.anchor.checked_add_months(Months::new(offset))
            }
            Cadence::Single => (self.index == 0).then_some(self.anchor),
        }
    }
}

/// First date on or after `start` falling on `weekday`.
///
/// An unrecognized weekday leaves `start` unshifted.
fn weekday_anchor(start: NaiveDate, weekday: &Tag<Weekday>) -> Option<NaiveDate> {
    let Some(target) = weekday.get() else {
        tracing::trace!(weekday = ?weekday, "Unrecognized weekday, anchoring on start date");
        return Some(start);
    };
    let current = start.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    let shift = (wanted + 7 - current) % 7;
    start.checked_add_days(Days::new(u64::from(shift)))
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn each(unit: StepUnit) -> Pattern {
        Pattern::Each { unit: unit.into() }
    }

    fn every(count: u32, unit: StepUnit) -> Pattern {
        Pattern::Every {
            count: NonZeroU32::new(count).unwrap(),
            unit: unit.into(),
        }
    }

    fn on(weekday: Weekday) -> Pattern {
        Pattern::DayOfWeek {
            weekday: weekday.into(),
        }
    }

    #[test]
    fn each_day_includes_both_bounds() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 1, 5), each(StepUnit::Day));
        assert_eq!(
            expand(&rule),
            vec![
                ymd(2025, 1, 1),
                ymd(2025, 1, 2),
                ymd(2025, 1, 3),
                ymd(2025, 1, 4),
                ymd(2025, 1, 5),
            ]
        );
    }

    #[test]
    fn each_week_steps_seven_days() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 1, 22), each(StepUnit::Week));
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 1), ymd(2025, 1, 8), ymd(2025, 1, 15), ymd(2025, 1, 22)]
        );
    }

    #[test]
    fn each_month_clamps_to_month_end_without_drift() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 31), ymd(2025, 4, 30), each(StepUnit::Month));
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 31), ymd(2025, 2, 28), ymd(2025, 3, 31), ymd(2025, 4, 30)]
        );
    }

    #[test]
    fn each_month_clamps_to_leap_day() {
        let rule = RecurrenceRule::new(ymd(2024, 1, 31), ymd(2024, 3, 1), each(StepUnit::Month));
        assert_eq!(expand(&rule), vec![ymd(2024, 1, 31), ymd(2024, 2, 29)]);
    }

    #[test]
    fn each_year_from_leap_day() {
        let rule = RecurrenceRule::new(ymd(2024, 2, 29), ymd(2028, 12, 31), each(StepUnit::Year));
        assert_eq!(
            expand(&rule),
            vec![
                ymd(2024, 2, 29),
                ymd(2025, 2, 28),
                ymd(2026, 2, 28),
                ymd(2027, 2, 28),
                ymd(2028, 2, 29),
            ]
        );
    }

    #[test]
    fn every_two_weeks() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 6), ymd(2025, 2, 3), every(2, StepUnit::Week));
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 6), ymd(2025, 1, 20), ymd(2025, 2, 3)]
        );
    }

    #[test]
    fn every_three_months() {
        let rule =
            RecurrenceRule::new(ymd(2025, 1, 15), ymd(2025, 12, 31), every(3, StepUnit::Month));
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 15), ymd(2025, 4, 15), ymd(2025, 7, 15), ymd(2025, 10, 15)]
        );
    }

    #[test]
    fn every_step_larger_than_span_yields_start_only() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 3, 1), every(2, StepUnit::Year));
        assert_eq!(expand(&rule), vec![ymd(2025, 1, 1)]);
    }

    #[test]
    fn day_of_week_shifts_forward() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 6), ymd(2025, 1, 27), on(Weekday::Wed));
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 8), ymd(2025, 1, 15), ymd(2025, 1, 22)]
        );
    }

    #[test]
    fn day_of_week_wraps_past_sunday() {
        // Friday start, Monday target: +3 days
        let rule = RecurrenceRule::new(ymd(2025, 1, 3), ymd(2025, 1, 20), on(Weekday::Mon));
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 6), ymd(2025, 1, 13), ymd(2025, 1, 20)]
        );
    }

    #[test]
    fn day_of_week_on_matching_start_stays_put() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 6), ymd(2025, 1, 13), on(Weekday::Mon));
        assert_eq!(expand(&rule), vec![ymd(2025, 1, 6), ymd(2025, 1, 13)]);
    }

    #[test]
    fn day_of_week_anchor_past_end_is_empty() {
        // Monday to Tuesday, looking for Friday
        let rule = RecurrenceRule::new(ymd(2025, 1, 6), ymd(2025, 1, 7), on(Weekday::Fri));
        assert!(expand(&rule).is_empty());
    }

    #[test]
    fn day_of_week_unrecognized_name_does_not_shift() {
        let rule = RecurrenceRule::new(
            ymd(2025, 1, 6),
            ymd(2025, 1, 20),
            Pattern::DayOfWeek {
                weekday: Tag::Unrecognized("Caturday".to_string()),
            },
        );
        assert_eq!(
            expand(&rule),
            vec![ymd(2025, 1, 6), ymd(2025, 1, 13), ymd(2025, 1, 20)]
        );
    }

    #[test]
    fn unrecognized_unit_truncates_to_start() {
        let unit = Tag::Unrecognized("fortnight".to_string());
        let rule = RecurrenceRule::new(
            ymd(2025, 1, 1),
            ymd(2025, 12, 31),
            Pattern::Each { unit: unit.clone() },
        );
        assert_eq!(expand(&rule), vec![ymd(2025, 1, 1)]);

        let rule = RecurrenceRule::new(
            ymd(2025, 1, 1),
            ymd(2025, 12, 31),
            Pattern::Every {
                count: NonZeroU32::new(3).unwrap(),
                unit,
            },
        );
        assert_eq!(expand(&rule), vec![ymd(2025, 1, 1)]);
    }

    #[test]
    fn unrecognized_unit_with_inverted_bounds_is_empty() {
        let rule = RecurrenceRule::new(
            ymd(2025, 2, 1),
            ymd(2025, 1, 1),
            Pattern::Each {
                unit: Tag::Unrecognized(String::new()),
            },
        );
        assert!(expand(&rule).is_empty());
    }

    #[test]
    fn inverted_bounds_are_empty() {
        let rule = RecurrenceRule::new(ymd(2025, 6, 10), ymd(2025, 6, 1), each(StepUnit::Day));
        assert!(expand(&rule).is_empty());
    }

    #[test]
    fn missing_bounds_are_empty() {
        let mut rule = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 1, 5), each(StepUnit::Day));
        rule.start = None;
        assert!(expand(&rule).is_empty());

        let mut rule = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 1, 5), each(StepUnit::Day));
        rule.end = None;
        assert!(expand(&rule).is_empty());
    }

    #[test]
    fn reserved_models_are_empty() {
        for pattern in [
            Pattern::MonthsOfYear {
                month: Some(chrono::Month::March.into()),
            },
            Pattern::FirstLastOf,
            Pattern::DayOfMonth,
            Pattern::Unrecognized("Quarterly".to_string()),
        ] {
            let rule = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 12, 31), pattern);
            assert!(expand(&rule).is_empty(), "{:?}", rule.pattern);
        }
    }

    #[test]
    fn single_day_rule_fires_once() {
        let rule = RecurrenceRule::new(ymd(2025, 3, 3), ymd(2025, 3, 3), each(StepUnit::Year));
        assert_eq!(expand(&rule), vec![ymd(2025, 3, 3)]);
    }

    #[test]
    fn series_stops_at_calendar_limit() {
        let rule = RecurrenceRule::new(
            NaiveDate::MAX - Days::new(3),
            NaiveDate::MAX,
            each(StepUnit::Week),
        );
        assert_eq!(expand(&rule), vec![NaiveDate::MAX - Days::new(3)]);
    }

    #[test]
    fn occurrences_is_lazy_and_fused() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 1), NaiveDate::MAX, each(StepUnit::Day));
        let first: Vec<_> = rule.occurrences().take(3).collect();
        assert_eq!(first, vec![ymd(2025, 1, 1), ymd(2025, 1, 2), ymd(2025, 1, 3)]);

        let short = RecurrenceRule::new(ymd(2025, 1, 1), ymd(2025, 1, 1), each(StepUnit::Day));
        let mut iter = short.occurrences();
        assert_eq!(iter.next(), Some(ymd(2025, 1, 1)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn expansion_is_repeatable() {
        let rule = RecurrenceRule::new(ymd(2025, 1, 31), ymd(2026, 1, 31), every(2, StepUnit::Month));
        assert_eq!(expand(&rule), expand(&rule));
        assert_eq!(rule.occurrences().collect::<Vec<_>>(), expand(&rule));
    }
}
