use crate::signup::{send_registration, SignupOutcome, SIGNUP_TOKEN};
use create_user_shared::messages::user_register::{RegistrationFailure, UserRegistration};
use create_user_shared::password::validate_password;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let username_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	let server_error_signal: &Signal<Option<RegistrationFailure>> = create_signal(ctx, None);

	// The violation list is derived from the password signal, so it can never lag behind
	// what's in the field.
	let password_violations_signal = create_memo(ctx, || validate_password(&password_signal.get()));
	// Password error class signal determines what the class of the password field should be based on whether there's a violation
	let password_error_class_signal = create_memo(ctx, || {
		if password_violations_signal.get().is_empty() {
			""
		} else {
			"error"
		}
	});
	let submit_disabled_signal = create_memo(ctx, || {
		username_signal.get().is_empty() || !password_violations_signal.get().is_empty()
	});

	// A server response only applies to the values that were submitted, so editing either
	// field dismisses it.
	create_effect(ctx, || {
		username_signal.track();
		password_signal.track();
		server_error_signal.set(None);
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		server_error_signal.set(None);

		let username = (*username_signal.get()).clone();
		let password = (*password_signal.get()).clone();
		// The submit button is disabled while these hold, but a submission can still arrive
		// another way (e.g. pressing Enter in a field), so the checks run again here.
		if username.is_empty() || !validate_password(&password).is_empty() {
			return;
		}

		spawn_local_scoped(ctx, async move {
			let registration = UserRegistration { username, password };
			match send_registration(&registration, SIGNUP_TOKEN).await {
				Ok(SignupOutcome::Created) => {
					let user_was_created_signal: &Signal<bool> = use_context(ctx);
					user_was_created_signal.set(true);
				}
				Ok(SignupOutcome::Rejected(failure)) => server_error_signal.set(Some(failure)),
				Err(error) => {
					log::error!("Registration request failed: {}", error);
					server_error_signal.set(Some(RegistrationFailure::ServerError));
				}
			}
		});
	};

	view! {
		ctx,
		h1 { "Create an Account" }
		form(id="register_user", on:submit=form_submission_handler) {
			div(class="input_with_message") {
				label(for="register_username") {
					"Username: "
				}
				input(id="register_username", type="text", bind:value=username_signal)
				(
					if let Some(failure) = (*server_error_signal.get()).clone() {
						view! {
							ctx,
							span(id="register_server_error", class="input_error") {
								(failure.to_string())
							}
						}
					} else {
						view! { ctx, }
					}
				)
			}
			div(class="input_with_message") {
				label(for="register_password") {
					"Password: "
				}
				input(id="register_password", type="password", class=*password_error_class_signal.get(), bind:value=password_signal)
				(
					if password_violations_signal.get().is_empty() {
						view! { ctx, }
					} else {
						view! {
							ctx,
							ul(id="register_password_errors") {
								Indexed(
									iterable=password_violations_signal,
									view=|ctx, violation| {
										view! {
											ctx,
											li(class="input_error register_password_error") {
												(violation.to_string())
											}
										}
									}
								)
							}
						}
					}
				)
			}
			button(type="submit", disabled=*submit_disabled_signal.get()) {
				"Create User"
			}
		}
	}
}
