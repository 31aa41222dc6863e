use dioxus::prelude::*;
use shared::{Field, Messages};

use crate::{
    use_login_form, Button, ButtonVariant, FieldError, Footer, LanguageSelector, PasswordField,
    Spinner,
};

const FACEBOOK_LOGO: Asset = asset!("/assets/facebook.svg");

fn input_classes(has_error: bool) -> String {
    let border = if has_error {
        "border-red-500"
    } else {
        "border-gray-300"
    };
    format!(
        "w-full px-4 py-3 border {border} rounded-md text-gray-600 text-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all"
    )
}

/// Branded login screen: identifier, password, inline errors and a
/// simulated submission.
#[component]
pub fn FacebookLogin() -> Element {
    let mut form = use_login_form(Messages::BRANDED);
    let submitting = form.is_submitting();
    let identifier_error = form.error(Field::Identifier);
    let password_error = form.error(Field::Password);
    let identifier_class = input_classes(!identifier_error.is_empty());
    let password_class = format!("{} pr-10", input_classes(!password_error.is_empty()));

    rsx! {
      div { class: "min-h-screen flex flex-col bg-gradient-to-b from-blue-50 to-white",
        LanguageSelector {}

        // Logo
        div { class: "w-full flex justify-center mt-20",
          div { class: "logo-pop",
            img {
              src: FACEBOOK_LOGO,
              alt: "Facebook Logo",
              width: "240",
              height: "96",
              class: "w-60 h-16 object-contain",
            }
          }
        }

        // Form
        div { class: "flex-1 flex flex-col items-center justify-center",
          div { class: "w-full max-w-[396px] flex flex-col items-center px-4",
            div { class: "w-full",
              form {
                novalidate: true,
                class: "w-full space-y-4",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    form.submit();
                },
                div {
                  div { class: "relative",
                    input {
                      class: identifier_class,
                      "type": "text",
                      placeholder: "Mobile number or email",
                      value: form.value(Field::Identifier),
                      oninput: move |e| form.edit(Field::Identifier, e.value()),
                    }
                    FieldError { message: identifier_error.clone() }
                  }
                }

                div {
                  div { class: "relative",
                    PasswordField {
                      form,
                      placeholder: "Password",
                      class: password_class,
                      toggle_class: "absolute right-3 top-6 -translate-y-1/2 text-gray-500 hover:text-gray-700 focus:outline-none cursor-pointer",
                    }
                    FieldError { message: password_error.clone() }
                  }
                }

                button {
                  class: "w-full bg-blue-600 text-white rounded-full py-3 text-xl font-medium relative overflow-hidden hover:bg-blue-700 transition-all hover:scale-[1.005] active:scale-[0.995] disabled:opacity-80 cursor-pointer",
                  "type": "submit",
                  disabled: submitting,
                  if submitting {
                    div { class: "flex items-center justify-center",
                      Spinner {}
                      span { "Logging in..." }
                    }
                  } else {
                    "Log in"
                  }
                }
              }

              div { class: "mt-4 mb-8 text-center",
                a {
                  class: "text-gray-600 text-[18px] font-medium hover:underline transition-colors",
                  href: "#",
                  "Forgot password?"
                }
              }
            }
          }
        }

        footer { class: "w-full flex flex-col items-center py-8",
          div { class: "w-full max-w-[396px] px-4",
            Button { variant: ButtonVariant::Outline, "Create new account" }
          }
          Footer {}
        }
      }
    }
}
