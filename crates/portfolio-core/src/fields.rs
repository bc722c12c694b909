//! Coercion of raw form fields into typed field updates.
//!
//! Edit-form submissions arrive as raw strings, present or absent. The
//! write path accepts them as-is: an absent description becomes the empty
//! string, and `founded` goes through a permissive integer cast, so
//! free-text input never fails a save.

use serde::{Deserialize, Serialize};

/// Typed values for the two mutable project fields.
///
/// Built from raw form input with [`FieldUpdate::from_raw`]; the store
/// applies both fields in one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    /// Replacement description.
    pub description: String,

    /// Replacement founding year.
    pub founded: i64,
}

impl FieldUpdate {
    /// Builds an update from raw form fields.
    ///
    /// Absent fields take their defaults: `""` for the description and `0`
    /// for the founding year. The year is coerced, never rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_core::FieldUpdate;
    ///
    /// let update = FieldUpdate::from_raw(Some("A great company"), Some("2001"));
    /// assert_eq!(update.founded, 2001);
    ///
    /// let update = FieldUpdate::from_raw(None, Some("not-a-number"));
    /// assert_eq!(update.description, "");
    /// assert_eq!(update.founded, 0);
    /// ```
    pub fn from_raw(description: Option<&str>, founded: Option<&str>) -> Self {
        Self {
            description: description.unwrap_or_default().to_string(),
            founded: founded.map(coerce_founded).unwrap_or_default(),
        }
    }
}

/// Permissive integer cast for the `founded` field.
///
/// Reads an optional sign and leading decimal digits after skipping leading
/// whitespace; anything after the digits is ignored. Input with no leading
/// integer coerces to 0. Values beyond the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use portfolio_core::coerce_founded;
///
/// assert_eq!(coerce_founded("1995"), 1995);
/// assert_eq!(coerce_founded("  1995-ish"), 1995);
/// assert_eq!(coerce_founded("not-a-number"), 0);
/// assert_eq!(coerce_founded(""), 0);
/// ```
pub fn coerce_founded(raw: &str) -> i64 {
    let mut chars = raw.trim_start().chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut saw_digit = false;
    for c in chars {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        saw_digit = true;
        let digit = i64::from(digit);
        value = if negative {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(digit))
                .unwrap_or(i64::MIN)
        } else {
            value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .unwrap_or(i64::MAX)
        };
    }

    if saw_digit { value } else { 0 }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_year() {
        assert_eq!(coerce_founded("1995"), 1995);
        assert_eq!(coerce_founded("2001"), 2001);
    }

    #[test]
    fn test_coerce_non_numeric_is_zero() {
        assert_eq!(coerce_founded("not-a-number"), 0);
        assert_eq!(coerce_founded(""), 0);
        assert_eq!(coerce_founded("   "), 0);
        assert_eq!(coerce_founded("year 2001"), 0);
    }

    #[test]
    fn test_coerce_ignores_trailing_garbage() {
        assert_eq!(coerce_founded("1995-ish"), 1995);
        assert_eq!(coerce_founded("2001.5"), 2001);
        assert_eq!(coerce_founded("  42abc"), 42);
    }

    #[test]
    fn test_coerce_signs() {
        assert_eq!(coerce_founded("-44"), -44);
        assert_eq!(coerce_founded("+1066"), 1066);
        assert_eq!(coerce_founded("-"), 0);
        assert_eq!(coerce_founded("+-1"), 0);
    }

    #[test]
    fn test_coerce_saturates_on_overflow() {
        assert_eq!(coerce_founded("99999999999999999999999"), i64::MAX);
        assert_eq!(coerce_founded("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_from_raw_both_present() {
        let update = FieldUpdate::from_raw(Some("A great company"), Some("2001"));
        assert_eq!(update.description, "A great company");
        assert_eq!(update.founded, 2001);
    }

    #[test]
    fn test_from_raw_absent_fields_take_defaults() {
        let update = FieldUpdate::from_raw(None, None);
        assert_eq!(update, FieldUpdate::default());
    }

    #[test]
    fn test_from_raw_description_is_not_trimmed() {
        // Descriptions are stored verbatim, no trimming or sanitization.
        let update = FieldUpdate::from_raw(Some("  spaced  "), None);
        assert_eq!(update.description, "  spaced  ");
    }
}
