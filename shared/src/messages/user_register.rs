use serde::{Deserialize, Serialize};
use std::fmt;

/// Data sent to the signup endpoint when trying to register an account
#[derive(Deserialize, Serialize)]
pub struct UserRegistration {
	pub username: String,
	pub password: String,
}

/// Error data from the signup endpoint for a failed registration attempt. The endpoint isn't
/// guaranteed to include the error list, so a body without one parses as an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct RegistrationErrorResponse {
	#[serde(default)]
	pub errors: Vec<String>,
}

/// The ways a registration attempt can be refused, as presented to the user
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationFailure {
	NotAuthenticated,
	PasswordNotAllowed,
	Rejected(Vec<String>),
	ServerError,
}

impl RegistrationFailure {
	/// Determines which failure a response represents. Statuses with a fixed meaning (401,
	/// 403, 500) take precedence over the response body; for everything else, the body's
	/// error list decides.
	pub fn classify(status: u16, response: &RegistrationErrorResponse) -> Self {
		match status {
			401 | 403 => Self::NotAuthenticated,
			500 => Self::ServerError,
			_ => {
				if response.errors.iter().any(|error| error == "not_allowed") {
					Self::PasswordNotAllowed
				} else if response.errors.is_empty() {
					Self::ServerError
				} else {
					Self::Rejected(response.errors.clone())
				}
			}
		}
	}
}

impl fmt::Display for RegistrationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotAuthenticated => write!(f, "Not authenticated to access this resource."),
			Self::PasswordNotAllowed => write!(
				f,
				"Sorry, the entered password is not allowed, please try a different one."
			),
			Self::Rejected(errors) => write!(f, "{}", errors.join(", ")),
			Self::ServerError => write!(f, "Something went wrong, please try again."),
		}
	}
}
