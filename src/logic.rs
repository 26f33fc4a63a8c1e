use chrono::{Datelike, NaiveDate};
use iced_aw::core::date::Date;

use crate::structures::form::DisplayTime;

pub fn picker_date_to_naive(date: Date) -> Result<NaiveDate, String> {
    match NaiveDate::from_ymd_opt(date.year, date.month, date.day) {
        Some(n) => Ok(n),
        None => Err(String::from("Invalid date")),
    }
}

pub fn naive_to_picker_date(date: NaiveDate) -> Date {
    Date::from_ymd(date.year(), date.month(), date.day())
}

/// `yyyy-MM-dd`, the fixed formatting convention for the date portion.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Join the two-digit display strings into `HH:MM:SS`.
pub fn format_time(display: &DisplayTime) -> String {
    format!("{}:{}:{}", display.hour, display.minute, display.second)
}
