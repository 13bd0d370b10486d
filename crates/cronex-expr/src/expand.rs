//! Field expanders and the grammar dispatcher.
//!
//! Every expander turns one raw field value into the ordered list of domain
//! tokens it stands for, or fails with a field-scoped [`ExpandError`]. The
//! dispatcher [`expand_field`] classifies the raw value and routes it to the
//! matching expander.

use crate::error::ExpandError;
use crate::field::{within_range, Field};
use crate::grammar::{classify, FieldPattern};

/// Sentinel token produced by the `?` marker.
pub const UNUSED: &str = "Unused";

/// Classifies `raw` and expands it for `field`.
///
/// This is the single entry point the expression assembly uses per field.
/// Failures are returned, not raised: the caller records them in the
/// per-field error map and continues with the remaining fields.
pub fn expand_field(field: Field, raw: &str) -> Result<Vec<String>, ExpandError> {
    match classify(raw) {
        FieldPattern::Wildcard => Ok(full_domain(field)),
        FieldPattern::Optional => Ok(vec![UNUSED.to_string()]),
        FieldPattern::CombinedRangeLiteral => expand_combined(field, raw),
        FieldPattern::Range => expand_range(field, raw),
        FieldPattern::Interval => expand_interval(field, raw),
        FieldPattern::List => expand_list(field, raw),
        FieldPattern::Literal => expand_literal(field, raw),
    }
}

/// Every integer in the field's domain, ascending, as decimal tokens.
fn full_domain(field: Field) -> Vec<String> {
    field.domain_values().map(|v| v.to_string()).collect()
}

/// Expands a single literal token.
///
/// The token is returned exactly as supplied; no case or numeric
/// canonicalization happens here.
pub fn expand_literal(field: Field, token: &str) -> Result<Vec<String>, ExpandError> {
    if within_range(field, token) {
        Ok(vec![token.to_string()])
    } else {
        Err(ExpandError::OutOfRange {
            field,
            value: token.to_string(),
        })
    }
}

/// Expands a comma-separated list of literals.
///
/// One invalid member rejects the whole list. Members are uppercased on
/// success, which is a no-op for the numeric fields.
pub fn expand_list(field: Field, raw: &str) -> Result<Vec<String>, ExpandError> {
    let members: Vec<&str> = raw.split(',').collect();
    if members.iter().any(|m| !within_range(field, m)) {
        return Err(ExpandError::InvalidListMember {
            field,
            value: raw.to_string(),
        });
    }
    Ok(members.iter().map(|m| m.to_uppercase()).collect())
}

/// Expands a `lower-upper` range.
///
/// A numeric range enumerates the domain integers from lower to upper
/// ascending; an inverted numeric range (`20-15`) yields an empty sequence
/// rather than wrapping. A symbolic range slices the field's symbol table
/// and wraps through the table end when the lower name sits after the upper
/// one (`FRI-MON` on a Sun-first week gives `FRI SAT SUN MON`).
pub fn expand_range(field: Field, raw: &str) -> Result<Vec<String>, ExpandError> {
    let invalid = || ExpandError::InvalidRange {
        field,
        value: raw.to_string(),
    };

    let (lower, upper) = raw.split_once('-').ok_or_else(invalid)?;
    if !within_range(field, lower) || !within_range(field, upper) {
        return Err(invalid());
    }

    if let Ok(lo) = lower.parse::<u32>() {
        // Mixed numeric/symbolic bounds are not a range.
        let hi: u32 = upper.parse().map_err(|_| invalid())?;
        return Ok((lo..=hi).map(|v| v.to_string()).collect());
    }

    let table = field.symbols().ok_or_else(invalid)?;
    let lo = field.symbol_position(lower).ok_or_else(invalid)?;
    let hi = field.symbol_position(upper).ok_or_else(invalid)?;

    let names: Vec<String> = if lo <= hi {
        table[lo..=hi].iter().map(|s| s.to_string()).collect()
    } else {
        table[lo..]
            .iter()
            .chain(table[..=hi].iter())
            .map(|s| s.to_string())
            .collect()
    };
    Ok(names)
}

/// Expands a `base/step` interval.
///
/// Selection is position-based within the relevant ordered sequence, not
/// arithmetic stepping by value. With a `*` base the sequence is the field's
/// whole integer domain; with a literal base it is the tail of the domain
/// (or symbol table) starting at the base. For a literal base the step must
/// itself be a legal domain value for the field, a deliberately stricter
/// rule than positivity alone.
pub fn expand_interval(field: Field, raw: &str) -> Result<Vec<String>, ExpandError> {
    let invalid = || ExpandError::InvalidInterval {
        field,
        value: raw.to_string(),
    };

    let (base, step_text) = raw.split_once('/').ok_or_else(invalid)?;
    let step: usize = step_text.parse().map_err(|_| invalid())?;
    if step == 0 {
        return Err(invalid());
    }

    if base == "*" {
        return Ok(full_domain(field).into_iter().step_by(step).collect());
    }

    if !within_range(field, base) || !within_range(field, step_text) {
        return Err(invalid());
    }

    if let Ok(start) = base.parse::<u32>() {
        let (_, hi) = field.domain();
        return Ok((start..=hi)
            .map(|v| v.to_string())
            .step_by(step)
            .collect());
    }

    let table = field.symbols().ok_or_else(invalid)?;
    let position = field.symbol_position(base).ok_or_else(invalid)?;
    Ok(table[position..]
        .iter()
        .step_by(step)
        .map(|s| s.to_string())
        .collect())
}

/// Expands the combined `AAA-BBB,CCC` form.
///
/// The prefix goes through the range expander, the suffix through the
/// literal expander; either failure propagates as that sub-expander's error.
pub fn expand_combined(field: Field, raw: &str) -> Result<Vec<String>, ExpandError> {
    let (range, literal) = raw.split_once(',').unwrap_or((raw, ""));
    let mut tokens = expand_range(field, range)?;
    tokens.extend(expand_literal(field, literal)?);
    Ok(tokens)
}
