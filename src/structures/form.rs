use chrono::NaiveDate;
use thiserror::Error;

use crate::structures::fields::TimeField;

/// One validation failure, worded for direct display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("date: a date must be selected")]
    MissingDate,
    #[error("{field}: must be between 0 and {max}")]
    OutOfRange { field: TimeField, max: u32 },
}

/// Zero-padded two-digit mirrors of the numeric time fields. These are the
/// strings shown in the inputs and joined at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl Default for DisplayTime {
    fn default() -> Self {
        Self {
            hour: String::from("00"),
            minute: String::from("00"),
            second: String::from("00"),
        }
    }
}

/// The widget-local form state. The date portion and the time portion are
/// edited independently and only combined at submission.
///
/// Invariant: `display` always equals the `%02` rendering of the numeric
/// fields. Both are written in the same commit, so no observable state has
/// them out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub date: Option<NaiveDate>,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub display: DisplayTime,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a raw text edit to one time field. Unparseable input is
    /// rejected and the previous value stays. In-range and wrapped values
    /// are stored numerically and as a two-digit display string together.
    /// Returns whether the commit happened.
    pub fn set_field(&mut self, field: TimeField, raw: &str) -> bool {
        let value = match raw.trim().parse::<i64>() {
            Ok(v) => field.wrap(v),
            Err(_) => return false,
        };
        self.store(field, value);
        true
    }

    /// Overwrite all three time fields at once (the suggested-time fill
    /// after a calendar selection).
    pub fn set_time(&mut self, hour: u32, minute: u32, second: u32) {
        self.store(TimeField::Hour, TimeField::Hour.wrap(i64::from(hour)));
        self.store(TimeField::Minute, TimeField::Minute.wrap(i64::from(minute)));
        self.store(TimeField::Second, TimeField::Second.wrap(i64::from(second)));
    }

    fn store(&mut self, field: TimeField, value: u32) {
        let padded = format!("{value:02}");
        match field {
            TimeField::Hour => {
                self.hour = value;
                self.display.hour = padded;
            }
            TimeField::Minute => {
                self.minute = value;
                self.display.minute = padded;
            }
            TimeField::Second => {
                self.second = value;
                self.display.second = padded;
            }
        }
    }

    pub fn field_value(&self, field: TimeField) -> u32 {
        match field {
            TimeField::Hour => self.hour,
            TimeField::Minute => self.minute,
            TimeField::Second => self.second,
        }
    }

    /// Check the composed value, collecting every violation rather than
    /// stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.date.is_none() {
            errors.push(FieldError::MissingDate);
        }
        for field in TimeField::ALL {
            let max = field.max();
            if self.field_value(field) > max {
                errors.push(FieldError::OutOfRange { field, max });
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// True once a date is selected and all three display strings hold a
    /// value. Gates the submit button.
    pub fn is_complete(&self) -> bool {
        self.date.is_some()
            && !self.display.hour.is_empty()
            && !self.display.minute.is_empty()
            && !self.display.second.is_empty()
    }

    /// True when nothing differs from the initial state. Gates the clear
    /// button.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
