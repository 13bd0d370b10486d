//! Schedule field identifiers, their legal domains, and symbol tables.

use serde::{Deserialize, Serialize};

/// Ordered symbolic names for the month field, one-based (JAN = 1).
pub const MONTH_NAMES: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Ordered symbolic names for the day-of-week field, zero-based (SUN = 0).
pub const DAY_NAMES: &[&str] = &["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// The five schedule positions of a cron expression, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Minute of the hour (0-59).
    Minute,
    /// Hour of the day (0-23).
    Hour,
    /// Day of the month (1-31).
    DayOfMonth,
    /// Month of the year (1-12, JAN-DEC).
    Month,
    /// Day of the week (0-6, SUN-SAT).
    DayOfWeek,
}

impl Field {
    /// Returns the inclusive integer domain bounds for this field.
    pub fn domain(&self) -> (u32, u32) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (0, 6),
        }
    }

    /// Returns the ordered symbol table for this field, if it has one.
    ///
    /// Only `Month` and `DayOfWeek` carry symbolic names; the purely numeric
    /// fields return `None`.
    pub fn symbols(&self) -> Option<&'static [&'static str]> {
        match self {
            Field::Month => Some(MONTH_NAMES),
            Field::DayOfWeek => Some(DAY_NAMES),
            _ => None,
        }
    }

    /// Returns every integer in this field's domain, ascending.
    pub fn domain_values(&self) -> impl Iterator<Item = u32> {
        let (lo, hi) = self.domain();
        lo..=hi
    }

    /// Returns the field name as used in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }

    /// Returns all fields in input order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Minute,
            Field::Hour,
            Field::DayOfMonth,
            Field::Month,
            Field::DayOfWeek,
        ]
    }

    /// Resolves a symbolic name to its position in this field's symbol table.
    ///
    /// The lookup is case-insensitive. Returns `None` for fields without a
    /// symbol table and for unknown names.
    pub fn symbol_position(&self, name: &str) -> Option<usize> {
        let upper = name.to_uppercase();
        self.symbols()?.iter().position(|s| *s == upper)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Checks whether a single token is a legal value for `field`.
///
/// An integer token is checked against the field's integer domain. Any other
/// token is uppercased and looked up in the field's symbol table; fields
/// without one (minute, hour, day-of-month) always fail that branch.
pub fn within_range(field: Field, token: &str) -> bool {
    if let Ok(value) = token.parse::<u32>() {
        let (lo, hi) = field.domain();
        return (lo..=hi).contains(&value);
    }
    field.symbol_position(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains() {
        assert_eq!(Field::Minute.domain(), (0, 59));
        assert_eq!(Field::Hour.domain(), (0, 23));
        assert_eq!(Field::DayOfMonth.domain(), (1, 31));
        assert_eq!(Field::Month.domain(), (1, 12));
        assert_eq!(Field::DayOfWeek.domain(), (0, 6));
    }

    #[test]
    fn test_symbol_tables() {
        assert_eq!(Field::Month.symbols().unwrap().len(), 12);
        assert_eq!(Field::DayOfWeek.symbols().unwrap().len(), 7);
        assert!(Field::Minute.symbols().is_none());
        assert!(Field::Hour.symbols().is_none());
        assert!(Field::DayOfMonth.symbols().is_none());
    }

    #[test]
    fn test_symbol_position_is_case_insensitive() {
        assert_eq!(Field::DayOfWeek.symbol_position("sun"), Some(0));
        assert_eq!(Field::DayOfWeek.symbol_position("Sat"), Some(6));
        assert_eq!(Field::Month.symbol_position("jan"), Some(0));
        assert_eq!(Field::Month.symbol_position("DEC"), Some(11));
        assert_eq!(Field::Month.symbol_position("BOB"), None);
    }

    #[test]
    fn test_within_range_numeric() {
        assert!(within_range(Field::Minute, "0"));
        assert!(within_range(Field::Minute, "59"));
        assert!(!within_range(Field::Minute, "60"));
        assert!(!within_range(Field::Hour, "24"));
        assert!(!within_range(Field::DayOfMonth, "0"));
        assert!(within_range(Field::DayOfMonth, "31"));
    }

    #[test]
    fn test_within_range_symbolic() {
        assert!(within_range(Field::Month, "JAN"));
        assert!(within_range(Field::Month, "dec"));
        assert!(within_range(Field::DayOfWeek, "Tue"));
        assert!(!within_range(Field::DayOfWeek, "BOB"));
        // Numeric-only fields never accept names.
        assert!(!within_range(Field::Minute, "JAN"));
        assert!(!within_range(Field::Hour, "MON"));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::DayOfMonth.to_string(), "day of month");
        assert_eq!(Field::Minute.to_string(), "minute");
    }

    #[test]
    fn test_all_fields_in_input_order() {
        let all = Field::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], Field::Minute);
        assert_eq!(all[4], Field::DayOfWeek);
    }
}
