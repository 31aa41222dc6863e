use dioxus::prelude::*;

/// Inline message under a field. Renders nothing when `message` is empty.
#[component]
pub fn FieldError(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    rsx! {
      p { class: "field-error text-red-500 text-sm mt-1", role: "alert", "{message}" }
    }
}
