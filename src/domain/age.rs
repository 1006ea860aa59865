use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `date_of_birth` and `as_of`.
///
/// Compares (month, day) tuples rather than ordinal day-of-year, so the
/// result never shifts across leap-year boundaries. A Feb 29 birthday counts
/// as reached on Mar 1 in non-leap years.
pub fn age_at(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
