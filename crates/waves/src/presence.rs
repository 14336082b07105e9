//! Per-year day index and day-presence checks.

use std::collections::HashMap;

use crate::error::WaveError;

/// Rows of a single year, indexed by day identifier.
///
/// Days are kept in the order they first appear in the input table; that
/// order is the order in which the scanner visits them.
#[derive(Debug, Clone, PartialEq)]
pub struct YearDays {
    year: i64,
    rows: HashMap<i64, usize>,
    order: Vec<(i64, usize)>,
}

impl YearDays {
    /// Creates an empty index for `year`.
    pub fn new(year: i64) -> Self {
        Self {
            year,
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Records that `day` lives at table row `row`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::DuplicateDay`] if `day` is already present.
    pub fn insert(&mut self, day: i64, row: usize) -> Result<(), WaveError> {
        if self.rows.insert(day, row).is_some() {
            return Err(WaveError::DuplicateDay {
                year: self.year,
                day,
            });
        }
        self.order.push((day, row));
        Ok(())
    }

    /// Splits parallel `years`/`days` columns into one index per year.
    ///
    /// Years come back in first-occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::DuplicateDay`] for the first repeated
    /// `(year, day)` pair in row order.
    pub fn group(years: &[i64], days: &[i64]) -> Result<Vec<YearDays>, WaveError> {
        let mut position: HashMap<i64, usize> = HashMap::new();
        let mut groups: Vec<YearDays> = Vec::new();
        for (row, (&year, &day)) in years.iter().zip(days.iter()).enumerate() {
            let idx = *position.entry(year).or_insert_with(|| {
                groups.push(YearDays::new(year));
                groups.len() - 1
            });
            groups[idx].insert(day, row)?;
        }
        Ok(groups)
    }

    /// The year this index covers.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Table row holding `day`, if present.
    pub fn row(&self, day: i64) -> Option<usize> {
        self.rows.get(&day).copied()
    }

    /// `(day, row)` pairs in first-occurrence order.
    pub fn entries(&self) -> &[(i64, usize)] {
        &self.order
    }

    /// Number of days present.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no day is present.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Returns `true` if a row exists for `day`.
pub fn has_day(year: &YearDays, day: i64) -> bool {
    year.rows.contains_key(&day)
}

/// Returns `true` if rows exist for `day`, `day - 1` and `day - 2`.
pub fn has_3day_run(year: &YearDays, day: i64) -> bool {
    has_day(year, day) && has_day(year, day - 1) && has_day(year, day - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_with(days: &[i64]) -> YearDays {
        let mut y = YearDays::new(2000);
        for (row, &d) in days.iter().enumerate() {
            y.insert(d, row).unwrap();
        }
        y
    }

    #[test]
    fn has_day_basic() {
        let y = year_with(&[1, 2, 3]);
        assert!(has_day(&y, 2));
        assert!(!has_day(&y, 4));
    }

    #[test]
    fn has_3day_run_requires_two_predecessors() {
        let y = year_with(&[1, 2, 3, 5]);
        assert!(has_3day_run(&y, 3));
        assert!(!has_3day_run(&y, 2));
        assert!(!has_3day_run(&y, 5));
    }

    #[test]
    fn has_3day_run_gap_in_middle() {
        let y = year_with(&[10, 12]);
        assert!(!has_3day_run(&y, 12));
    }

    #[test]
    fn insert_duplicate_errors() {
        let mut y = YearDays::new(1999);
        y.insert(7, 0).unwrap();
        assert_eq!(
            y.insert(7, 1),
            Err(WaveError::DuplicateDay { year: 1999, day: 7 })
        );
    }

    #[test]
    fn group_first_occurrence_order() {
        let years = [2001, 2000, 2001, 2000];
        let days = [1, 1, 2, 2];
        let groups = YearDays::group(&years, &days).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].year(), 2001);
        assert_eq!(groups[0].entries(), &[(1, 0), (2, 2)]);
        assert_eq!(groups[1].year(), 2000);
        assert_eq!(groups[1].entries(), &[(1, 1), (2, 3)]);
    }

    #[test]
    fn group_keeps_unsorted_day_order() {
        let groups = YearDays::group(&[2000, 2000, 2000], &[3, 1, 2]).unwrap();
        let days: Vec<i64> = groups[0].entries().iter().map(|&(d, _)| d).collect();
        assert_eq!(days, vec![3, 1, 2]);
    }

    #[test]
    fn group_same_day_different_years_ok() {
        let groups = YearDays::group(&[2000, 2001], &[5, 5]).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn group_duplicate_errors() {
        let result = YearDays::group(&[2000, 2000], &[5, 5]);
        assert_eq!(result, Err(WaveError::DuplicateDay { year: 2000, day: 5 }));
    }

    #[test]
    fn group_empty() {
        assert!(YearDays::group(&[], &[]).unwrap().is_empty());
    }
}
