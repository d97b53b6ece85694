/// Checks a two-part unlock code against a fixed accepted pair.
///
/// The input is split on every `+`; anything other than exactly two parts is
/// rejected as malformed, and two parts that differ from the accepted pair are
/// rejected as unauthorized.
///
/// # Examples
/// ```
/// use status_unlock_api::validation::unlock::check_unlock;
///
/// assert!(check_unlock("742767+1234").is_ok());
/// assert!(check_unlock("742767+9999").is_err());
/// assert!(check_unlock("abc").is_err());
/// ```
pub mod unlock;
