use create_user_shared::messages::user_register::{
	RegistrationErrorResponse, RegistrationFailure, UserRegistration,
};
use gloo_net::http::Request;
use std::fmt;

/// The signup endpoint registration attempts are sent to
pub const SIGNUP_ENDPOINT: &str =
	"https://api.challenge.hennge.com/password-validation-challenge-api/001/challenge-signup";

/// The challenge API token. This ships inside the client, so it's visible to anyone running
/// the app; a deployment with a real trust boundary would need to provision a credential and
/// pass it to [`send_registration`] instead of using this constant.
pub const SIGNUP_TOKEN: &str = "Your Api Cant share mine !!";

/// How the signup endpoint answered a registration attempt
pub enum SignupOutcome {
	Created,
	Rejected(RegistrationFailure),
}

/// Errors that can occur sending a registration request or reading its response
pub enum SignupRequestError {
	Send(gloo_net::Error),
	ResponseBody(gloo_net::Error),
}

impl fmt::Display for SignupRequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Send(error) => write!(f, "Failed to send the registration request: {}", error),
			Self::ResponseBody(error) => write!(f, "Failed to read the registration response: {}", error),
		}
	}
}

/// Sends a single registration attempt to the signup endpoint. Each call is exactly one
/// attempt; nothing is retried.
///
/// The response body is read as JSON before the status is interpreted, so a body that isn't
/// JSON is an error even when the status indicates success.
///
/// # Errors
///
/// Errors occur when the request can't be serialized or sent (including network failures)
/// and when the response body can't be read as JSON.
pub async fn send_registration(
	registration: &UserRegistration,
	token: &str,
) -> Result<SignupOutcome, SignupRequestError> {
	let response = Request::post(SIGNUP_ENDPOINT)
		.header("Authorization", &format!("Bearer {}", token))
		.json(registration)
		.map_err(SignupRequestError::Send)?
		.send()
		.await
		.map_err(SignupRequestError::Send)?;

	let status = response.status();
	let body: serde_json::Value = response.json().await.map_err(SignupRequestError::ResponseBody)?;
	log::debug!("Signup endpoint responded with status {}: {:?}", status, body);

	if response.ok() {
		return Ok(SignupOutcome::Created);
	}

	// An error body that doesn't match the expected shape is treated the same as one with no
	// error list at all.
	let error_response: RegistrationErrorResponse = serde_json::from_value(body).unwrap_or_default();
	Ok(SignupOutcome::Rejected(RegistrationFailure::classify(
		status,
		&error_response,
	)))
}
