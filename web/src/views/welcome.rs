use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use ui::WelcomeLogin;

use crate::Route;

#[component]
pub fn WelcomePage() -> Element {
    let navigator = use_navigator();

    let social_login = move |_| {
        info!("Logging in with Facebook");
        navigator.push(Route::FacebookPage {});
    };

    rsx! {
      WelcomeLogin { on_social_login: social_login }
    }
}
