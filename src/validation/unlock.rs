use thiserror::Error;

/// First half of the accepted code.
pub const UNLOCK_CODE: &str = "742767";
/// Second half of the accepted code.
pub const SECONDARY_CODE: &str = "1234";
/// URL handed back when the code matches.
pub const UNLOCK_URL: &str = "https://www.google.com";

const SEPARATOR: char = '+';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnlockError {
    /// The input did not split into exactly two parts.
    #[error("Invalid format")]
    InvalidFormat,

    /// Both parts were present but did not match the accepted pair.
    #[error("Unauthorized")]
    Mismatch,
}

/// Splits `input` on every `+`, requiring exactly two parts.
///
/// Empty parts are kept, so `"+1234"` parses as `("", "1234")`.
pub fn split_code(input: &str) -> Result<(&str, &str), UnlockError> {
    let mut parts = input.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(secondary), None) => Ok((code, secondary)),
        _ => Err(UnlockError::InvalidFormat),
    }
}

/// Checks an unlock code against the fixed accepted pair.
///
/// # Returns
/// The URL to open on a match, otherwise the reason for rejection.
///
/// # Examples
/// ```
/// use status_unlock_api::validation::unlock::{check_unlock, UnlockError, UNLOCK_URL};
///
/// assert_eq!(check_unlock("742767+1234"), Ok(UNLOCK_URL));
/// assert_eq!(check_unlock("742767+9999"), Err(UnlockError::Mismatch));
/// assert_eq!(check_unlock("1+2+3"), Err(UnlockError::InvalidFormat));
/// ```
pub fn check_unlock(input: &str) -> Result<&'static str, UnlockError> {
    let (code, secondary) = split_code(input)?;
    if code == UNLOCK_CODE && secondary == SECONDARY_CODE {
        Ok(UNLOCK_URL)
    } else {
        Err(UnlockError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_pair() {
        assert_eq!(check_unlock("742767+1234"), Ok("https://www.google.com"));
    }

    #[test]
    fn test_wrong_secondary_code() {
        assert_eq!(check_unlock("742767+9999"), Err(UnlockError::Mismatch));
    }

    #[test]
    fn test_wrong_primary_code() {
        assert_eq!(check_unlock("111111+1234"), Err(UnlockError::Mismatch));
    }

    #[test]
    fn test_swapped_parts() {
        assert_eq!(check_unlock("1234+742767"), Err(UnlockError::Mismatch));
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(check_unlock("abc"), Err(UnlockError::InvalidFormat));
        assert_eq!(check_unlock("742767"), Err(UnlockError::InvalidFormat));
        assert_eq!(check_unlock(""), Err(UnlockError::InvalidFormat));
    }

    #[test]
    fn test_too_many_parts() {
        assert_eq!(check_unlock("1+2+3"), Err(UnlockError::InvalidFormat));
        assert_eq!(check_unlock("742767+1234+"), Err(UnlockError::InvalidFormat));
    }

    #[test]
    fn test_empty_parts_are_kept() {
        assert_eq!(split_code("+"), Ok(("", "")));
        assert_eq!(split_code("+1234"), Ok(("", "1234")));
        assert_eq!(check_unlock("742767+"), Err(UnlockError::Mismatch));
    }

    #[test]
    fn test_comparison_is_exact() {
        assert_eq!(check_unlock(" 742767+1234"), Err(UnlockError::Mismatch));
        assert_eq!(check_unlock("742767+1234 "), Err(UnlockError::Mismatch));
        assert_eq!(check_unlock("742767 1234"), Err(UnlockError::InvalidFormat));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UnlockError::InvalidFormat.to_string(), "Invalid format");
        assert_eq!(UnlockError::Mismatch.to_string(), "Unauthorized");
    }
}
