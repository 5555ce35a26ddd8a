// ABOUTME: Calendar streak calculations over workout dates
// ABOUTME: Longest run, current run, and distinct active-day counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Distinct dates in ascending order
fn distinct<I: IntoIterator<Item = NaiveDate>>(dates: I) -> BTreeSet<NaiveDate> {
    dates.into_iter().collect()
}

/// Number of distinct dates
pub fn active_days<I: IntoIterator<Item = NaiveDate>>(dates: I) -> u64 {
    distinct(dates).len() as u64
}

/// Longest run of calendar-consecutive distinct dates
///
/// Several workouts on one day count once; a gap of one or more empty days
/// starts a new run.
///
/// ```
/// use chrono::NaiveDate;
/// use pierre_logbook::intelligence::streaks::longest_streak;
///
/// let dates = ["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-05"]
///     .iter()
///     .map(|d| d.parse::<NaiveDate>().unwrap());
/// assert_eq!(longest_streak(dates), 3);
/// ```
pub fn longest_streak<I: IntoIterator<Item = NaiveDate>>(dates: I) -> u64 {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for date in distinct(dates) {
        current = match previous {
            Some(prev) if date - prev == Duration::days(1) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }
    longest
}

/// Length of the run that ends today, or yesterday if today is not logged yet
///
/// Dates after `today` are ignored.
pub fn current_streak<I: IntoIterator<Item = NaiveDate>>(dates: I, today: NaiveDate) -> u64 {
    let days = distinct(dates.into_iter().filter(|d| *d <= today));
    let Some(&last) = days.last() else {
        return 0;
    };
    if today - last > Duration::days(1) {
        return 0;
    }

    let mut streak = 0;
    let mut expected = last;
    for date in days.iter().rev() {
        if *date != expected {
            break;
        }
        streak += 1;
        expected = *date - Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_input_has_no_streak() {
        assert_eq!(longest_streak(Vec::<NaiveDate>::new()), 0);
        assert_eq!(
            current_streak(Vec::<NaiveDate>::new(), day("2025-01-01")),
            0
        );
    }

    #[test]
    fn test_duplicate_dates_count_once() {
        let dates = ["2025-03-01", "2025-03-01", "2025-03-02"].map(day);
        assert_eq!(longest_streak(dates), 2);
        assert_eq!(active_days(dates), 2);
    }

    #[test]
    fn test_unordered_input_is_sorted_first() {
        let dates = ["2025-03-03", "2025-03-01", "2025-03-02"].map(day);
        assert_eq!(longest_streak(dates), 3);
    }

    #[test]
    fn test_current_streak_allows_rest_today() {
        let dates = ["2025-05-08", "2025-05-09", "2025-05-10"].map(day);
        assert_eq!(current_streak(dates, day("2025-05-10")), 3);
        assert_eq!(current_streak(dates, day("2025-05-11")), 3);
        assert_eq!(current_streak(dates, day("2025-05-12")), 0);
    }
}
