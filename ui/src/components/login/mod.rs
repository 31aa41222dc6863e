use dioxus::prelude::*;
use shared::{Field, Messages};

use crate::{use_login_form, Button, ButtonVariant, FieldError, PasswordField, Spinner};

const INPUT_CLASSES: &str = "w-full rounded-md border border-gray-200 bg-gray-50 px-3 py-2 text-gray-800 focus:outline-none focus:border-[#F57C00] focus:ring-2 focus:ring-[#F57C00]/20 transition-all duration-300";

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Fired by the "Continue with Facebook" button
    on_social_login: EventHandler<()>,
}

/// Generic "Welcome" sign-in card.
#[component]
pub fn WelcomeLogin(props: Props) -> Element {
    let mut form = use_login_form(Messages::WELCOME);
    let mut active = use_signal(|| None::<Field>);
    let submitting = form.is_submitting();

    let label_class = move |field: Field| {
        if active() == Some(field) {
            "text-sm font-medium text-[#F57C00]"
        } else {
            "text-sm font-medium text-gray-600"
        }
    };
    let wrapper_class = move |field: Field| {
        if active() == Some(field) {
            "relative transition-all duration-300 scale-[1.02]"
        } else {
            "relative transition-all duration-300"
        }
    };

    rsx! {
      div { class: "relative flex min-h-screen items-center justify-center bg-gradient-to-br from-gray-50 to-gray-100 p-4",
        // bg decorations
        div { class: "absolute inset-0 overflow-hidden pointer-events-none",
          div { class: "blob absolute top-[10%] right-[15%] h-[300px] w-[300px] rounded-full bg-[#FFCA28]" }
          div { class: "blob blob-slow absolute bottom-[15%] left-[10%] h-[250px] w-[250px] rounded-full bg-[#FF8F00]" }
          div { class: "blob blob-late absolute top-[40%] left-[20%] h-[200px] w-[200px] rounded-full bg-[#F57C00]" }
        }

        div { class: "card-enter w-full max-w-md z-10",
          div { class: "overflow-hidden rounded-lg border-none bg-white shadow-xl",
            div { class: "h-2 w-full bg-gradient-to-r from-[#FFA000] via-[#F57C00] to-[#FFCA28]" }

            // Header
            div { class: "space-y-1 px-6 pt-8",
              div { class: "flex justify-center mb-4",
                div { class: "h-16 w-16 rounded-full bg-gradient-to-br from-[#FFA000] to-[#F57C00] flex items-center justify-center shadow-lg",
                  svg {
                    class: "h-8 w-8 text-white",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    view_box: "0 0 24 24",
                    path { d: "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" }
                  }
                }
              }
              h1 { class: "text-2xl font-bold text-center text-gray-800", "Welcome" }
              p { class: "text-center text-gray-500", "Sign in with Facebook to continue" }
            }

            // Form
            div { class: "space-y-6 px-6 pt-4",
              form {
                novalidate: true,
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    form.submit();
                },
                div { class: "space-y-2",
                  label { r#for: "email", class: label_class(Field::Identifier), "Email" }
                  div { class: wrapper_class(Field::Identifier),
                    input {
                      id: "email",
                      class: INPUT_CLASSES,
                      "type": "email",
                      placeholder: "your.email@example.com",
                      autocomplete: "email",
                      value: form.value(Field::Identifier),
                      oninput: move |e| form.edit(Field::Identifier, e.value()),
                      onfocus: move |_| active.set(Some(Field::Identifier)),
                      onblur: move |_| active.set(None),
                    }
                    if active() == Some(Field::Identifier) {
                      div { class: "input-underline absolute bottom-0 left-0 h-0.5 w-full bg-gradient-to-r from-[#FFA000] to-[#F57C00]" }
                    }
                  }
                  FieldError { message: form.error(Field::Identifier) }
                }

                div { class: "space-y-2 mt-4",
                  label { r#for: "password", class: label_class(Field::Password), "Password" }
                  div { class: wrapper_class(Field::Password),
                    PasswordField {
                      form,
                      placeholder: "••••••••",
                      class: "{INPUT_CLASSES} pr-10",
                      toggle_class: "absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-[#F57C00] transition-colors duration-200 cursor-pointer",
                      autocomplete: "current-password",
                      onfocus: move |_| active.set(Some(Field::Password)),
                      onblur: move |_| active.set(None),
                    }
                    if active() == Some(Field::Password) {
                      div { class: "input-underline absolute bottom-0 left-0 h-0.5 w-full bg-gradient-to-r from-[#FFA000] to-[#F57C00]" }
                    }
                  }
                  FieldError { message: form.error(Field::Password) }
                }

                div { class: "mt-6 overflow-hidden rounded-md",
                  Button { submit: true, disabled: submitting,
                    if submitting {
                      Spinner {}
                      span { "Signing in..." }
                    } else {
                      "Sign In"
                    }
                  }
                }
              }
            }

            // Footer
            div { class: "flex flex-col space-y-4 px-6 pt-6 pb-8",
              div { class: "relative w-full flex items-center justify-center my-2",
                div { class: "absolute inset-0 flex items-center",
                  div { class: "w-full border-t border-gray-200" }
                }
                div { class: "relative bg-white px-4 text-sm text-gray-500", "Or" }
              }

              Button {
                variant: ButtonVariant::Brand,
                onclick: move |_| props.on_social_login.call(()),
                svg {
                  class: "mr-2 h-5 w-5",
                  fill: "none",
                  stroke: "currentColor",
                  stroke_width: "2",
                  stroke_linecap: "round",
                  stroke_linejoin: "round",
                  view_box: "0 0 24 24",
                  path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
                }
                "Continue with Facebook"
              }

              p { class: "text-center text-xs text-gray-500 mt-4",
                "By continuing, you agree to our Terms of Service and Privacy Policy."
              }
            }
          }
        }
      }
    }
}
