//! Cronex Expression Library
//!
//! This crate classifies and expands the five schedule fields of a
//! cron-style expression (minute, hour, day-of-month, month, day-of-week)
//! plus a trailing command string. Each field's raw text is matched against
//! one of several micro-grammars (wildcard, optional marker, range, step
//! interval, comma list, literal, and a combined range-plus-literal form),
//! validated against the field's legal domain, and expanded into the
//! ordered list of concrete values it stands for.
//!
//! # Overview
//!
//! Expansion is per-field and non-fatal: a field that fails to expand
//! records an error in the expression's error map while the remaining
//! fields are still attempted. The overall expression is valid exactly when
//! the error map is empty.
//!
//! # Example
//!
//! ```
//! use cronex_expr::{CronExpression, Field};
//!
//! let expr = CronExpression::parse("*/15 0 1,15 * MON-FRI /usr/bin/find").unwrap();
//!
//! assert!(expr.is_valid());
//! assert_eq!(expr.expansion_text(Field::Minute).unwrap(), "0 15 30 45");
//! assert_eq!(expr.expansion_text(Field::DayOfWeek).unwrap(), "MON TUE WED THU FRI");
//! assert_eq!(expr.command(), "/usr/bin/find");
//! ```
//!
//! # Modules
//!
//! - [`field`]: field identifiers, domain tables, and the range validator
//! - [`grammar`]: the ordered micro-grammar classifier
//! - [`expand`]: the per-grammar expanders and the dispatcher
//! - [`expr`]: the immutable [`CronExpression`] aggregate
//! - [`error`]: field-scoped and construction-level error types

pub mod error;
pub mod expand;
pub mod expr;
pub mod field;
pub mod grammar;

// Re-export commonly used types at the crate root
pub use error::{CronExpressionError, ExpandError};
pub use expand::{expand_field, UNUSED};
pub use expr::CronExpression;
pub use field::{within_range, Field, DAY_NAMES, MONTH_NAMES};
pub use grammar::{classify, FieldPattern};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A single expression exercising every grammar except the combined form.
    #[test]
    fn test_mixed_grammars_across_fields() {
        let expr = CronExpression::parse("*/5 5/3 ? JAN,MAR,MAY FRI-MON /bin/true").unwrap();

        assert!(expr.is_valid());
        assert_eq!(
            expr.expansion_text(Field::Minute).unwrap(),
            "0 5 10 15 20 25 30 35 40 45 50 55"
        );
        assert_eq!(expr.expansion_text(Field::Hour).unwrap(), "5 8 11 14 17 20 23");
        assert_eq!(expr.expansion_text(Field::DayOfMonth).unwrap(), "Unused");
        assert_eq!(expr.expansion_text(Field::Month).unwrap(), "JAN MAR MAY");
        assert_eq!(
            expr.expansion_text(Field::DayOfWeek).unwrap(),
            "FRI SAT SUN MON"
        );
    }

    #[test]
    fn test_combined_form_inside_expression() {
        let expr = CronExpression::parse("0 0 1 * FRI-MON,WED deploy").unwrap();
        assert_eq!(
            expr.expansion_text(Field::DayOfWeek).unwrap(),
            "FRI SAT SUN MON WED"
        );
    }

    #[test]
    fn test_every_field_wildcard_matches_domains() {
        let expr = CronExpression::parse("* * * * * run").unwrap();
        assert_eq!(expr.expansion(Field::Minute).unwrap().len(), 60);
        assert_eq!(expr.expansion(Field::Hour).unwrap().len(), 24);
        assert_eq!(expr.expansion(Field::DayOfMonth).unwrap().len(), 31);
        assert_eq!(
            expr.expansion_text(Field::Month).unwrap(),
            "1 2 3 4 5 6 7 8 9 10 11 12"
        );
        assert_eq!(expr.expansion_text(Field::DayOfWeek).unwrap(), "0 1 2 3 4 5 6");
    }

    #[test]
    fn test_all_five_fields_can_fail_independently() {
        let expr = CronExpression::parse("61 25 32 13 7 cmd").unwrap();
        assert!(!expr.is_valid());
        assert_eq!(expr.errors().len(), 5);
        for field in Field::all() {
            assert!(expr.expansion(*field).is_none());
            assert!(expr.error(*field).is_some());
        }
        // The command still survives construction.
        assert_eq!(expr.command(), "cmd");
    }

    #[test]
    fn test_expansion_tokens_stay_within_domain() {
        let expr = CronExpression::parse("*/7 3-9 */10 FEB-JUN SAT job").unwrap();
        assert!(expr.is_valid());
        for field in Field::all() {
            for token in expr.expansion(*field).unwrap() {
                assert!(within_range(*field, token), "{token} escaped {field}");
            }
        }
    }
}
