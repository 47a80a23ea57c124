use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

/// Cards are valid for a fixed five-year horizon from creation.
const EXPIRATION_YEARS: u32 = 5;

/// Expiration date for a card created at `now`, formatted "MM/YY".
pub fn expiration_date(now: DateTime<Utc>) -> Option<String> {
    now.checked_add_months(Months::new(12 * EXPIRATION_YEARS))
        .map(|expires| expires.format("%m/%y").to_string())
}

/// Whole-month difference between an "MM/YY" expiration date and `now`.
/// Negative means the card has expired. `None` when the stored value does
/// not parse as "MM/YY".
pub fn months_until_expiration(expiration: &str, now: NaiveDate) -> Option<i32> {
    let (month, year) = parse_expiration(expiration)?;
    let expires = (2000 + year) * 12 + (month - 1);
    let current = now.year() * 12 + now.month() as i32 - 1;
    Some(expires - current)
}

fn parse_expiration(value: &str) -> Option<(i32, i32)> {
    let (month, year) = value.split_once('/')?;
    let month: i32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }

    Some((month, year))
}
