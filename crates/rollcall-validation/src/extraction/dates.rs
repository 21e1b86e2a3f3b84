//! Date-token detection in narrative text.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// ISO `YYYY-MM-DD`.
static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

/// Month name followed by a day, with an optional ordinal suffix:
/// "March 3", "Sept. 14th", "Jan 1st".
static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?[ \t]+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
    .unwrap()
});

/// Whether the text references at least one calendar date.
pub fn mentions_dates(text: &str) -> bool {
    has_iso_date(text) || has_month_day(text)
}

fn has_iso_date(text: &str) -> bool {
    ISO_DATE_RE.captures_iter(text).any(|caps| {
        let year = caps[1].parse::<i32>().ok();
        let month = caps[2].parse::<u32>().ok();
        let day = caps[3].parse::<u32>().ok();
        matches!(
            (year, month, day),
            (Some(y), Some(m), Some(d)) if NaiveDate::from_ymd_opt(y, m, d).is_some()
        )
    })
}

fn has_month_day(text: &str) -> bool {
    MONTH_DAY_RE.captures_iter(text).any(|caps| {
        caps[1]
            .parse::<u32>()
            .map(|day| (1..=31).contains(&day))
            .unwrap_or(false)
    })
}
