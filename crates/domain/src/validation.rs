//! Bound checks shared by every record kind.

use std::ops::RangeInclusive;

use crate::error::ValidationError;

/// Accepted range for a respondent's age.
pub const AGE: RangeInclusive<u8> = 10..=100;

/// Accepted range for every 1–5 ordinal rating.
pub const RATING: RangeInclusive<u8> = 1..=5;

/// Ensure `value` lies within `range`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] otherwise.
pub fn in_range(
    field: &'static str,
    value: u8,
    range: &RangeInclusive<u8>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
            value,
        })
    }
}

/// Ensure the character count of `value` lies within `min..=max`.
///
/// # Errors
///
/// Returns [`ValidationError::Length`] otherwise.
pub fn length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::Length {
            field,
            min,
            max,
            len,
        })
    }
}

/// Ensure `value` is exactly one of `allowed`.
///
/// # Errors
///
/// Returns [`ValidationError::NotAllowed`] otherwise.
pub fn one_of(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::NotAllowed {
            field,
            allowed,
            value: value.to_string(),
        })
    }
}

/// Run `check` only when the optional value was supplied.
pub(crate) fn when_some<T: ?Sized>(
    value: Option<&T>,
    check: impl FnOnce(&T) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), check)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_range_bounds_inclusively() {
        assert!(in_range("age", 10, &AGE).is_ok());
        assert!(in_range("age", 100, &AGE).is_ok());
        assert!(in_range("sleep_issues", 1, &RATING).is_ok());
        assert!(in_range("sleep_issues", 5, &RATING).is_ok());
    }

    #[test]
    fn should_reject_values_outside_range() {
        assert_eq!(
            in_range("age", 5, &AGE),
            Err(ValidationError::OutOfRange {
                field: "age",
                min: 10,
                max: 100,
                value: 5,
            })
        );
        assert!(in_range("age", 101, &AGE).is_err());
        assert!(in_range("feel_depressed", 0, &RATING).is_err());
        assert!(in_range("feel_depressed", 6, &RATING).is_err());
    }

    #[test]
    fn should_count_characters_not_bytes() {
        // four characters, seven bytes
        assert!(length("gender", "ñañá", 1, 4).is_ok());
    }

    #[test]
    fn should_reject_empty_and_oversized_strings() {
        assert!(matches!(
            length("gender", "", 1, 30),
            Err(ValidationError::Length { len: 0, .. })
        ));
        assert!(length("gender", &"x".repeat(31), 1, 30).is_err());
        assert!(length("gender", &"x".repeat(30), 1, 30).is_ok());
    }

    #[test]
    fn should_match_enumeration_exactly() {
        const YES_NO: &[&str] = &["Yes", "No"];
        assert!(one_of("uses_social_media", "Yes", YES_NO).is_ok());
        assert!(one_of("uses_social_media", "No", YES_NO).is_ok());
        assert!(one_of("uses_social_media", "yes", YES_NO).is_err());
        assert!(one_of("uses_social_media", "Maybe", YES_NO).is_err());
    }
}
