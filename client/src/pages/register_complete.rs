use sycamore::prelude::*;

#[component]
pub fn RegistrationCompleteView<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		div(id="register_complete") {
			h1 {
				"Registration complete!"
			}
			p {
				"Your account has been created."
			}
			p {
				"You can now sign in with the username and password you chose."
			}
		}
	}
}
