use sycamore::prelude::*;

mod pages;
mod signup;

use pages::register::RegistrationView;
use pages::register_complete::RegistrationCompleteView;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| {
		// Setting this flag is the only effect a successful registration has; everything
		// that happens after the account exists belongs to whatever hosts the form.
		let user_was_created_signal = create_signal(ctx, false);
		provide_context_ref(ctx, user_was_created_signal);

		view! {
			ctx,
			(if *user_was_created_signal.get() {
				view! { ctx, RegistrationCompleteView }
			} else {
				view! { ctx, RegistrationView }
			})
		}
	});
}
