//! Field grammar classification.
//!
//! Each raw field value belongs to exactly one micro-grammar. Classification
//! tests the rules in a fixed priority order because some inputs would match
//! more than one rule: `FRI-MON,WED` contains `-` and `,` but is a combined
//! range-plus-literal, and `*/15` contains `/` but not `-`, so the range
//! check must run before the interval check.

/// The micro-grammar a raw field value was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    /// Exactly `*`: every value in the field's domain.
    Wildcard,
    /// Exactly `?`: the field is unused.
    Optional,
    /// `AAA-BBB,CCC`: a symbolic range followed by one symbolic literal.
    CombinedRangeLiteral,
    /// `lower-upper`: a numeric or symbolic range.
    Range,
    /// `base/step`: a step interval.
    Interval,
    /// Comma-separated literals.
    List,
    /// A single literal token.
    Literal,
}

/// Classifies a raw field value, first match wins.
pub fn classify(raw: &str) -> FieldPattern {
    if raw == "*" {
        FieldPattern::Wildcard
    } else if raw == "?" {
        FieldPattern::Optional
    } else if is_combined_range_literal(raw) {
        FieldPattern::CombinedRangeLiteral
    } else if raw.contains('-') {
        FieldPattern::Range
    } else if raw.contains('/') {
        FieldPattern::Interval
    } else if raw.contains(',') {
        FieldPattern::List
    } else {
        FieldPattern::Literal
    }
}

/// Matches exactly `AAA-BBB,CCC`: three 3-letter alphabetic tokens.
///
/// The rule does not generalize to numeric tokens or to more than one
/// trailing literal; anything else falls through to the range rule.
fn is_combined_range_literal(raw: &str) -> bool {
    let Some((range, literal)) = raw.split_once(',') else {
        return false;
    };
    if literal.contains(',') {
        return false;
    }
    let Some((lower, upper)) = range.split_once('-') else {
        return false;
    };
    is_name_token(lower) && is_name_token(upper) && is_name_token(literal)
}

fn is_name_token(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_alphabetic())
}
