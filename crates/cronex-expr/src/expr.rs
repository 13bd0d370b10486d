//! The cron expression aggregate.

use std::collections::BTreeMap;

use crate::error::{CronExpressionError, ExpandError};
use crate::expand::expand_field;
use crate::field::Field;

/// Number of schedule fields in an expression.
const FIELD_COUNT: usize = 5;

/// Raw value and expansion outcome for one schedule field.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSlot {
    raw: String,
    tokens: Option<Vec<String>>,
}

/// A parsed cron expression: five field expansions (or per-field errors)
/// plus the trailing command string.
///
/// Construction attempts all five fields regardless of earlier failures;
/// a field that fails stays without an expansion and contributes one entry
/// to the error map. The expression is immutable after construction.
///
/// # Example
///
/// ```
/// use cronex_expr::{CronExpression, Field};
///
/// let expr = CronExpression::parse("*/15 0 1,15 * MON-FRI /usr/bin/find").unwrap();
/// assert!(expr.is_valid());
/// assert_eq!(expr.expansion_text(Field::Minute).unwrap(), "0 15 30 45");
/// assert_eq!(expr.command(), "/usr/bin/find");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    slots: [FieldSlot; FIELD_COUNT],
    errors: BTreeMap<Field, ExpandError>,
    command: String,
}

impl CronExpression {
    /// Parses a whitespace-delimited input line.
    ///
    /// The first five tokens are the schedule fields in fixed order; all
    /// remaining tokens, rejoined with single spaces, form the command
    /// string. Fewer than five tokens is a construction-level error; field
    /// expansion failures are not, they land in [`errors`](Self::errors).
    pub fn parse(line: &str) -> Result<Self, CronExpressionError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < FIELD_COUNT {
            return Err(CronExpressionError::MissingFields {
                found: tokens.len(),
            });
        }

        let command = tokens[FIELD_COUNT..].join(" ");
        let mut errors = BTreeMap::new();

        let slots: [FieldSlot; FIELD_COUNT] = std::array::from_fn(|i| {
            let field = Field::all()[i];
            let raw = tokens[i];
            let tokens = match expand_field(field, raw) {
                Ok(tokens) => Some(tokens),
                Err(err) => {
                    errors.insert(field, err);
                    None
                }
            };
            FieldSlot {
                raw: raw.to_string(),
                tokens,
            }
        });

        Ok(Self {
            slots,
            errors,
            command,
        })
    }

    /// Parses a pre-tokenized sequence, joining with single spaces first.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, CronExpressionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = tokens
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::parse(&line)
    }

    /// Returns the raw value supplied for `field`.
    pub fn raw(&self, field: Field) -> &str {
        &self.slots[field as usize].raw
    }

    /// Returns the expansion tokens for `field`, absent if it failed.
    pub fn expansion(&self, field: Field) -> Option<&[String]> {
        self.slots[field as usize].tokens.as_deref()
    }

    /// Returns the expansion for `field` as a space-joined string.
    pub fn expansion_text(&self, field: Field) -> Option<String> {
        self.expansion(field).map(|tokens| tokens.join(" "))
    }

    /// Returns the per-field error map; empty for a valid expression.
    pub fn errors(&self) -> &BTreeMap<Field, ExpandError> {
        &self.errors
    }

    /// Returns the error recorded for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&ExpandError> {
        self.errors.get(&field)
    }

    /// True when no field failed to expand.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the command string (empty when only five tokens were given).
    pub fn command(&self) -> &str {
        &self.command
    }
}
