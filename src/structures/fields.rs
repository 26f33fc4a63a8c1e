#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hour, TimeField::Minute, TimeField::Second];

    /// Largest value the field accepts (23 for hours, 59 otherwise).
    pub fn max(self) -> u32 {
        match self {
            TimeField::Hour => 23,
            TimeField::Minute | TimeField::Second => 59,
        }
    }

    /// Single-step wraparound: anything below 0 lands on the upper bound,
    /// anything above the upper bound lands on 0. Not modulo arithmetic.
    pub fn wrap(self, value: i64) -> u32 {
        let max = i64::from(self.max());
        if value < 0 {
            self.max()
        } else if value > max {
            0
        } else {
            value as u32
        }
    }
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
        };
        write!(f, "{s}")
    }
}
