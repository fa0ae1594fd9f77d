//! Indonesian date labels.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::MalformedDateError;

/// Indonesian month names, January first.
pub const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian weekday name.
#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Reformat a provider label such as `"Sabtu, 19/07/2025"` into
/// `"Sabtu, 19 Juli 2025"`.
///
/// The weekday name is kept verbatim and the day loses any leading zero.
///
/// # Errors
///
/// Returns [`MalformedDateError::Pattern`] when the label is not
/// `<weekday>, DD/MM/YYYY`, and [`MalformedDateError::InvalidDate`] when the
/// numbers do not form a calendar date.
pub fn format_localized_date(label: &str) -> Result<String, MalformedDateError> {
    let pattern_error = || MalformedDateError::Pattern {
        input: label.to_string(),
    };

    let (day_name, date_part) = label.split_once(", ").ok_or_else(pattern_error)?;
    if day_name.is_empty() || day_name.contains(',') {
        return Err(pattern_error());
    }

    let mut parts = date_part.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(pattern_error());
    };
    let numeric = |part: &str, min_len: usize, max_len: usize| -> Option<u32> {
        let ok = (min_len..=max_len).contains(&part.len())
            && part.bytes().all(|b| b.is_ascii_digit());
        ok.then(|| part.parse().ok()).flatten()
    };
    let (Some(day), Some(month), Some(year)) =
        (numeric(day, 1, 2), numeric(month, 1, 2), numeric(year, 4, 4))
    else {
        return Err(pattern_error());
    };

    let date = i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(|| MalformedDateError::InvalidDate {
            input: label.to_string(),
        })?;

    Ok(format!(
        "{day_name}, {} {} {}",
        date.day(),
        month_name(date),
        date.year()
    ))
}

/// Render a calendar date with Indonesian weekday and month names, e.g.
/// `"Kamis, 17 Juli 2025"`.
#[must_use]
pub fn format_indonesian_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date),
        date.year()
    )
}
