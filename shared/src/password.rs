use std::fmt;

pub const PASSWORD_MIN_LENGTH: usize = 10;
pub const PASSWORD_MAX_LENGTH: usize = 24;

/// A single way in which a password can fail the registration policy
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PasswordViolation {
	TooShort,
	TooLong,
	ContainsWhitespace,
	NoDigit,
	NoUppercaseLetter,
	NoLowercaseLetter,
}

impl fmt::Display for PasswordViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TooShort => write!(f, "Password must be at least {} characters long", PASSWORD_MIN_LENGTH),
			Self::TooLong => write!(f, "Password must be at most {} characters long", PASSWORD_MAX_LENGTH),
			Self::ContainsWhitespace => write!(f, "Password cannot contain spaces"),
			Self::NoDigit => write!(f, "Password must contain at least one number"),
			Self::NoUppercaseLetter => write!(f, "Password must contain at least one uppercase letter"),
			Self::NoLowercaseLetter => write!(f, "Password must contain at least one lowercase letter"),
		}
	}
}

/// Checks a password against the registration policy. Every rule is evaluated, so all of the
/// violated rules are reported at once, always in the same order. An empty result means the
/// password is acceptable.
pub fn validate_password(password: &str) -> Vec<PasswordViolation> {
	let mut violations = Vec::new();

	let length = password.chars().count();
	if length < PASSWORD_MIN_LENGTH {
		violations.push(PasswordViolation::TooShort);
	}
	if length > PASSWORD_MAX_LENGTH {
		violations.push(PasswordViolation::TooLong);
	}
	if password.chars().any(char::is_whitespace) {
		violations.push(PasswordViolation::ContainsWhitespace);
	}
	if !password.chars().any(|c| c.is_ascii_digit()) {
		violations.push(PasswordViolation::NoDigit);
	}
	if !password.chars().any(|c| c.is_ascii_uppercase()) {
		violations.push(PasswordViolation::NoUppercaseLetter);
	}
	if !password.chars().any(|c| c.is_ascii_lowercase()) {
		violations.push(PasswordViolation::NoLowercaseLetter);
	}

	violations
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn acceptable_password_has_no_violations() {
		assert!(validate_password("Abcdefg123").is_empty());
	}

	#[test]
	fn boundary_lengths_are_acceptable() {
		// Exactly the minimum and maximum lengths
		assert!(validate_password("Abcdefg123").is_empty());
		assert!(validate_password("Abcdefghijklmnopqrstuv12").is_empty());
	}

	#[test]
	fn lengths_just_outside_the_bounds_are_violations() {
		assert_eq!(validate_password("Abcdefg12"), vec![PasswordViolation::TooShort]);
		assert_eq!(validate_password("Abcdefghijklmnopqrstuv123"), vec![PasswordViolation::TooLong]);
	}

	#[test]
	fn interior_whitespace_is_a_violation() {
		assert_eq!(validate_password("Abcdef 123x"), vec![PasswordViolation::ContainsWhitespace]);
	}

	#[test]
	fn missing_character_classes_are_violations() {
		assert_eq!(validate_password("Abcdefghij"), vec![PasswordViolation::NoDigit]);
		assert_eq!(validate_password("abcdefg123"), vec![PasswordViolation::NoUppercaseLetter]);
		assert_eq!(validate_password("ABCDEFG123"), vec![PasswordViolation::NoLowercaseLetter]);
	}

	#[test]
	fn long_all_lowercase_password_accumulates_violations_in_order() {
		let violations = validate_password("aaaaaaaaaaaaaaaaaaaaaaaaaa");
		assert_eq!(
			violations,
			vec![
				PasswordViolation::TooLong,
				PasswordViolation::NoDigit,
				PasswordViolation::NoUppercaseLetter
			]
		);
	}

	#[test]
	fn all_rules_are_reported_at_once_in_order() {
		let violations = validate_password(" ");
		assert_eq!(
			violations,
			vec![
				PasswordViolation::TooShort,
				PasswordViolation::ContainsWhitespace,
				PasswordViolation::NoDigit,
				PasswordViolation::NoUppercaseLetter,
				PasswordViolation::NoLowercaseLetter
			]
		);
	}

	#[test]
	fn validation_is_idempotent() {
		for password in ["", "Abcdefg123", "aaaaaaaaaaaaaaaaaaaaaaaaaa", "short 1A"] {
			assert_eq!(validate_password(password), validate_password(password));
		}
	}

	#[test]
	fn violation_messages_match_the_policy() {
		assert_eq!(
			PasswordViolation::TooShort.to_string(),
			"Password must be at least 10 characters long"
		);
		assert_eq!(
			PasswordViolation::TooLong.to_string(),
			"Password must be at most 24 characters long"
		);
		assert_eq!(PasswordViolation::ContainsWhitespace.to_string(), "Password cannot contain spaces");
		assert_eq!(
			PasswordViolation::NoDigit.to_string(),
			"Password must contain at least one number"
		);
		assert_eq!(
			PasswordViolation::NoUppercaseLetter.to_string(),
			"Password must contain at least one uppercase letter"
		);
		assert_eq!(
			PasswordViolation::NoLowercaseLetter.to_string(),
			"Password must contain at least one lowercase letter"
		);
	}
}
