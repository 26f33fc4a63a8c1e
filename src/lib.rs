pub mod logic;
pub mod structures;
pub mod views;

use chrono::{FixedOffset, NaiveDate, Timelike};
use iced::Color;

use structures::clock::{Clock, SystemClock};
use structures::fields::TimeField;
use structures::form::{FieldError, FormState};

/// Offset applied to the current UTC instant when suggesting a default
/// time after a calendar selection.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;

pub fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).unwrap()
}

/// The picker core: form state plus the clock and offset used for the
/// suggested-time fill. Owned exclusively by the GUI shell.
pub struct App {
    pub form: FormState,
    offset: FixedOffset,
    clock: Box<dyn Clock>,
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_parts(Box::new(SystemClock), default_offset())
    }

    pub fn with_parts(clock: Box<dyn Clock>, offset: FixedOffset) -> Self {
        Self {
            form: FormState::new(),
            offset,
            clock,
        }
    }

    /// Calendar selection. `None` (nothing picked) is a no-op. A date
    /// stores the date portion and fills the time fields once with the
    /// clock's current instant shifted by the configured offset.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        let Some(date) = date else {
            return;
        };
        self.form.date = Some(date);
        let suggested = self.clock.now_utc().with_timezone(&self.offset).time();
        self.form
            .set_time(suggested.hour(), suggested.minute(), suggested.second());
        tracing::debug!(%date, time = %logic::format_time(&self.form.display), "date selected");
    }

    /// Commit a raw edit to one time field (normalized by the form).
    pub fn set_time_field(&mut self, field: TimeField, raw: &str) {
        if !self.form.set_field(field, raw) {
            tracing::debug!(%field, raw, "rejected unparseable time input");
        }
    }

    /// Validate and format the composed value. No side effect beyond the
    /// returned confirmation.
    pub fn submit(&self) -> Result<Submission, Vec<FieldError>> {
        self.form.validate()?;
        let Some(date) = self.form.date else {
            return Err(vec![FieldError::MissingDate]);
        };
        let submission = Submission {
            date: logic::format_date(date),
            time: logic::format_time(&self.form.display),
        };
        tracing::info!(date = %submission.date, time = %submission.time, "submitted");
        Ok(submission)
    }

    pub fn clear(&mut self) {
        self.form.reset();
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_complete()
    }

    pub fn can_clear(&self) -> bool {
        !self.form.is_default()
    }

    /// Date shown when the picker overlay opens: the selection if there is
    /// one, otherwise today in the configured offset.
    pub fn picker_date(&self) -> iced_aw::core::date::Date {
        let date = self
            .form
            .date
            .unwrap_or_else(|| self.clock.now_utc().with_timezone(&self.offset).date_naive());
        logic::naive_to_picker_date(date)
    }
}

/// The formatted value pair surfaced by the confirmation notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub date: String,
    pub time: String,
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "date: {}\ntime: {}", self.date, self.time)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenDatePicker,
    CancelDatePicker,
    DateSelected(iced_aw::date_picker::Date),
    HourChanged(String),
    MinuteChanged(String),
    SecondChanged(String),
    Submit,
    Clear,
    DismissNotice,
}

pub fn panel_bg() -> Color {
    Color::from_rgb8(0x10, 0x10, 0x14)
} // dark panel
pub fn panel_border() -> Color {
    Color::from_rgb8(0x2A, 0x2A, 0x33)
} // subtle border
pub fn label_color() -> Color {
    Color::from_rgb8(0xD6, 0xD6, 0xE2)
} // light text
pub fn success_color() -> Color {
    Color::from_rgb8(0x4C, 0xC3, 0x7A)
} // confirmation accent
pub fn error_color() -> Color {
    Color::from_rgb8(0xE5, 0x53, 0x5E)
} // validation accent

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now_utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn app_at(rfc3339: &str) -> App {
        let instant = rfc3339.parse::<DateTime<Utc>>().unwrap();
        App::with_parts(Box::new(FixedClock(instant)), default_offset())
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn date_selection_fills_all_time_fields() {
        let mut app = app_at("2024-03-15T14:30:45Z");
        app.select_date(Some(march_15()));
        assert_eq!(app.form.date, Some(march_15()));
        // UTC 14:30:45 shifted by -3 hours.
        assert_eq!(app.form.display.hour, "11");
        assert_eq!(app.form.display.minute, "30");
        assert_eq!(app.form.display.second, "45");
    }

    #[test]
    fn suggested_time_wraps_across_midnight() {
        let mut app = app_at("2024-03-15T01:05:09Z");
        app.select_date(Some(march_15()));
        assert_eq!(app.form.display.hour, "22");
        assert_eq!(app.form.display.minute, "05");
        assert_eq!(app.form.display.second, "09");
    }

    #[test]
    fn selecting_nothing_is_a_noop() {
        let mut app = app_at("2024-03-15T14:30:45Z");
        app.select_date(None);
        assert!(app.form.date.is_none());
        assert!(!app.can_submit());
    }

    #[test]
    fn new_selection_replaces_previous_date() {
        let mut app = app_at("2024-03-15T14:30:45Z");
        app.select_date(Some(march_15()));
        let later = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        app.select_date(Some(later));
        assert_eq!(app.form.date, Some(later));
    }

    #[test]
    fn submit_without_date_names_the_date_field() {
        let app = app_at("2024-03-15T14:30:45Z");
        let errors = app.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("date"));
    }

    #[test]
    fn clamp_then_submit_scenario() {
        // Select 2024-03-15 at a fixed instant, overshoot the hour,
        // undershoot the minute, and submit.
        let mut app = app_at("2024-03-15T15:00:30Z");
        app.select_date(Some(march_15()));
        app.set_time_field(TimeField::Hour, "25");
        assert_eq!(app.form.display.hour, "00");
        app.set_time_field(TimeField::Minute, "-1");
        assert_eq!(app.form.display.minute, "59");
        let submission = app.submit().unwrap();
        let message = submission.to_string();
        assert!(message.contains("2024-03-15"));
        assert!(message.contains("00:59:30"));
    }

    #[test]
    fn unparseable_edit_keeps_committed_value() {
        let mut app = app_at("2024-03-15T15:00:30Z");
        app.set_time_field(TimeField::Second, "17");
        app.set_time_field(TimeField::Second, "abc");
        assert_eq!(app.form.display.second, "17");
    }

    #[test]
    fn clear_restores_initial_state() {
        let mut app = app_at("2024-03-15T14:30:45Z");
        assert!(!app.can_clear());
        app.select_date(Some(march_15()));
        assert!(app.can_clear());
        assert!(app.can_submit());
        app.clear();
        assert!(app.form.date.is_none());
        assert_eq!(logic::format_time(&app.form.display), "00:00:00");
        assert!(!app.can_clear());
        assert!(!app.can_submit());
    }

    #[test]
    fn picker_opens_on_selection_or_today() {
        let mut app = app_at("2024-06-01T10:00:00Z");
        let today = app.picker_date();
        assert_eq!((today.year, today.month, today.day), (2024, 6, 1));
        app.select_date(Some(march_15()));
        let shown = app.picker_date();
        assert_eq!((shown.year, shown.month, shown.day), (2024, 3, 15));
    }
}
