//! Calendar ranges over civil dates.

use jiff::Span;
use jiff::civil::{Date, DateTime};

use crate::TimeError;

/// Dates from `start` towards `stop`, excluding `stop` (the same as `start..stop`).
///
/// Each item is the previous one plus `step`; month and year steps clamp to the end of
/// the month (`2019-01-31 + 1 month` is `2019-02-28`). Ascending ranges continue while the
/// date is before `stop`, descending ones while it is after. A zero `step` yields nothing.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    stop: Date,
    step: Span,
    ascending: bool,
}

impl DateRange {
    pub fn new(start: Date, stop: Date, step: Span, ascending: bool) -> Self {
        let next = if step.is_zero() { None } else { Some(start) };

        Self {
            next,
            stop,
            step,
            ascending,
        }
    }

    /// One day at a time, ascending.
    pub fn days(start: Date, stop: Date) -> Self {
        Self::new(start, stop, Span::new().days(1), true)
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;

        let in_range = if self.ascending {
            current < self.stop
        } else {
            current > self.stop
        };
        if !in_range {
            self.next = None;
            return None;
        }

        self.next = current.checked_add(self.step).ok();
        Some(current)
    }
}

/// Split `[begin, end)` into consecutive ranges `years` long; the last one ends at `end`.
///
/// Each boundary is the previous boundary plus `years` years, so a range starting on
/// February 29th continues from February 28th.
pub fn yearly_ranges(begin: Date, end: Date, years: u16) -> Result<Vec<(Date, Date)>, TimeError> {
    if begin > end {
        return Err(TimeError::BeginAfterEnd { begin, end });
    }
    if years == 0 {
        return Err(TimeError::ZeroYears);
    }

    let step = Span::new().try_years(years)?;
    let mut ranges = Vec::new();
    let mut lower = begin;

    loop {
        match lower.checked_add(step) {
            Ok(upper) if upper < end => {
                ranges.push((lower, upper));
                lower = upper;
            }
            _ => {
                ranges.push((lower, end));
                break;
            }
        }
    }

    Ok(ranges)
}

/// The range from [`yearly_ranges`] that contains `date`, or `None` when `date` is outside
/// `[begin, end)`.
pub fn find_yearly_range(
    begin: Date,
    end: Date,
    years: u16,
    date: Date,
) -> Result<Option<(Date, Date)>, TimeError> {
    let ranges = yearly_ranges(begin, end, years)?;

    if date < begin || date >= end {
        return Ok(None);
    }

    Ok(ranges.into_iter().find(|(_, upper)| date < *upper))
}

/// The last second of `month` in `year`.
pub fn month_last_datetime(year: i16, month: i8) -> Result<DateTime, TimeError> {
    let first = Date::new(year, month, 1)?;
    Ok(first.last_of_month().at(23, 59, 59, 0))
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use jiff::civil::{date, datetime};

    use super::*;

    fn collect(start: Date, stop: Date, step: Span, ascending: bool) -> Vec<Date> {
        DateRange::new(start, stop, step, ascending).collect()
    }

    #[test]
    fn empty_ranges() {
        let jan1 = date(2019, 1, 1);
        let jan2 = date(2019, 1, 2);

        assert!(DateRange::days(jan1, jan1).next().is_none());
        assert!(DateRange::days(jan2, jan1).next().is_none());
        assert!(collect(jan1, jan1, 1.month(), true).is_empty());
        assert!(collect(jan1, jan1, (-1).days(), false).is_empty());
        assert!(collect(jan1, jan2, (-1).days(), false).is_empty());
        assert!(collect(jan1, jan1, (-1).months(), false).is_empty());
        assert!(collect(jan1, jan2, 0.days(), true).is_empty());
    }

    #[test]
    fn ascending_ranges() {
        assert_eq!(
            DateRange::days(date(2019, 1, 31), date(2019, 2, 2)).collect::<Vec<_>>(),
            vec![date(2019, 1, 31), date(2019, 2, 1)]
        );
        assert_eq!(
            collect(date(2019, 1, 31), date(2019, 2, 2), 2.days(), true),
            vec![date(2019, 1, 31)]
        );
        assert_eq!(
            collect(date(2019, 1, 1), date(2019, 3, 1), 1.month(), true),
            vec![date(2019, 1, 1), date(2019, 2, 1)]
        );
    }

    #[test]
    fn descending_ranges() {
        assert_eq!(
            collect(date(2019, 2, 1), date(2019, 1, 30), (-1).days(), false),
            vec![date(2019, 2, 1), date(2019, 1, 31)]
        );
        assert_eq!(
            collect(date(2019, 2, 2), date(2019, 1, 31), (-2).days(), false),
            vec![date(2019, 2, 2)]
        );
        assert_eq!(
            collect(date(2019, 3, 1), date(2019, 1, 1), (-1).months(), false),
            vec![date(2019, 3, 1), date(2019, 2, 1)]
        );
    }

    #[test]
    fn month_steps_clamp() {
        assert_eq!(
            collect(date(2019, 1, 31), date(2019, 5, 1), 1.month(), true),
            vec![
                date(2019, 1, 31),
                date(2019, 2, 28),
                date(2019, 3, 28),
                date(2019, 4, 28)
            ]
        );
    }

    #[test]
    fn yearly_splits() {
        let begin = date(2015, 6, 1);
        let end = date(2018, 3, 1);

        assert_eq!(
            yearly_ranges(begin, end, 1).unwrap(),
            vec![
                (date(2015, 6, 1), date(2016, 6, 1)),
                (date(2016, 6, 1), date(2017, 6, 1)),
                (date(2017, 6, 1), end),
            ]
        );
        assert_eq!(
            yearly_ranges(begin, end, 2).unwrap(),
            vec![(date(2015, 6, 1), date(2017, 6, 1)), (date(2017, 6, 1), end)]
        );
        assert_eq!(yearly_ranges(begin, end, 5).unwrap(), vec![(begin, end)]);
        assert_eq!(yearly_ranges(begin, begin, 1).unwrap(), vec![(begin, begin)]);
    }

    #[test]
    fn yearly_split_exactly_on_boundary() {
        let begin = date(2016, 1, 1);
        let end = date(2018, 1, 1);

        assert_eq!(
            yearly_ranges(begin, end, 1).unwrap(),
            vec![(begin, date(2017, 1, 1)), (date(2017, 1, 1), end)]
        );
    }

    #[test]
    fn yearly_split_errors() {
        let begin = date(2015, 6, 1);
        let end = date(2018, 3, 1);

        assert!(matches!(
            yearly_ranges(end, begin, 1),
            Err(TimeError::BeginAfterEnd { .. })
        ));
        assert!(matches!(yearly_ranges(begin, end, 0), Err(TimeError::ZeroYears)));
    }

    #[test]
    fn find_range_for_date() {
        let begin = date(2015, 6, 1);
        let end = date(2018, 3, 1);
        let find = |d| find_yearly_range(begin, end, 1, d).unwrap();

        assert_eq!(find(date(2015, 5, 31)), None);
        assert_eq!(find(begin), Some((begin, date(2016, 6, 1))));
        assert_eq!(find(date(2016, 6, 1)), Some((date(2016, 6, 1), date(2017, 6, 1))));
        assert_eq!(find(date(2018, 2, 28)), Some((date(2017, 6, 1), end)));
        assert_eq!(find(end), None);
    }

    #[test]
    fn last_second_of_month() {
        assert_eq!(
            month_last_datetime(2019, 2).unwrap(),
            datetime(2019, 2, 28, 23, 59, 59, 0)
        );
        assert_eq!(
            month_last_datetime(2020, 2).unwrap(),
            datetime(2020, 2, 29, 23, 59, 59, 0)
        );
        assert_eq!(
            month_last_datetime(2019, 12).unwrap(),
            datetime(2019, 12, 31, 23, 59, 59, 0)
        );
        assert!(month_last_datetime(2019, 13).is_err());
    }
}
