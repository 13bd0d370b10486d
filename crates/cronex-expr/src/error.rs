//! Error types for field expansion and expression construction.

use serde::Serialize;
use thiserror::Error;

use crate::field::Field;

/// A field-scoped expansion failure.
///
/// Expansion errors never abort the whole expression: the dispatcher records
/// them in the per-field error map and carries on with the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// A literal value outside the field's legal domain.
    #[error("{value} is outside of the allowed range for {field}")]
    OutOfRange {
        /// Field the literal was supplied for.
        field: Field,
        /// The offending raw token.
        value: String,
    },

    /// At least one comma-list element outside the domain.
    #[error("list {value} contains a value outside of the allowed range for {field}")]
    InvalidListMember {
        /// Field the list was supplied for.
        field: Field,
        /// The whole raw list as given.
        value: String,
    },

    /// Either range bound outside the domain, or an unresolvable symbolic bound.
    #[error("range {value} is not valid for {field}")]
    InvalidRange {
        /// Field the range was supplied for.
        field: Field,
        /// The whole raw range as given.
        value: String,
    },

    /// Invalid base or invalid step value in a `base/step` interval.
    #[error("interval {value} is not valid for {field}")]
    InvalidInterval {
        /// Field the interval was supplied for.
        field: Field,
        /// The whole raw interval as given.
        value: String,
    },
}

impl ExpandError {
    /// Returns the field this error is scoped to.
    pub fn field(&self) -> Field {
        match self {
            ExpandError::OutOfRange { field, .. }
            | ExpandError::InvalidListMember { field, .. }
            | ExpandError::InvalidRange { field, .. }
            | ExpandError::InvalidInterval { field, .. } => *field,
        }
    }

    /// Returns a stable kind string for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            ExpandError::OutOfRange { .. } => "out_of_range",
            ExpandError::InvalidListMember { .. } => "invalid_list_member",
            ExpandError::InvalidRange { .. } => "invalid_range",
            ExpandError::InvalidInterval { .. } => "invalid_interval",
        }
    }
}

impl Serialize for ExpandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Top-level error for expression construction.
///
/// Unlike [`ExpandError`], these prevent a `CronExpression` from being built
/// at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronExpressionError {
    /// The input line had fewer than the five required schedule fields.
    #[error("expected 5 schedule fields, got {found}")]
    MissingFields {
        /// Number of whitespace-delimited tokens found.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_error_display() {
        let err = ExpandError::OutOfRange {
            field: Field::Hour,
            value: "90".to_string(),
        };
        assert_eq!(err.to_string(), "90 is outside of the allowed range for hour");

        let err = ExpandError::InvalidRange {
            field: Field::DayOfWeek,
            value: "TUE-BOB".to_string(),
        };
        assert_eq!(err.to_string(), "range TUE-BOB is not valid for day of week");
    }

    #[test]
    fn test_expand_error_field_and_kind() {
        let err = ExpandError::InvalidInterval {
            field: Field::Minute,
            value: "80/15".to_string(),
        };
        assert_eq!(err.field(), Field::Minute);
        assert_eq!(err.kind(), "invalid_interval");
    }

    #[test]
    fn test_missing_fields_display() {
        let err = CronExpressionError::MissingFields { found: 3 };
        assert_eq!(err.to_string(), "expected 5 schedule fields, got 3");
    }

    #[test]
    fn test_expand_error_serializes_to_message() {
        let err = ExpandError::InvalidListMember {
            field: Field::Month,
            value: "JAN,BOB".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            "\"list JAN,BOB contains a value outside of the allowed range for month\""
        );
    }
}
