//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Returns the current year on the local calendar.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(year_in(Utc::now(), &Local))
}

fn year_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> i32 {
    now.with_timezone(tz).year()
}
