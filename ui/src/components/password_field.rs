use dioxus::prelude::*;
use shared::Field;

use crate::LoginFormHandle;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    form: LoginFormHandle,
    #[props(into)]
    placeholder: String,
    /// Classes of the input element itself
    #[props(into)]
    class: String,
    /// Classes of the eye toggle
    #[props(into)]
    toggle_class: String,
    #[props(optional, into)]
    autocomplete: Option<String>,
    onfocus: Option<EventHandler<FocusEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
}

/// Password input with a show/hide toggle. Toggling never touches the value.
#[component]
pub fn PasswordField(props: Props) -> Element {
    let mut form = props.form;
    let visible = form.password_visible();
    let label = if visible { "Hide password" } else { "Show password" };

    rsx! {
      input {
        id: "password",
        class: "{props.class}",
        "type": form.password_input_type(),
        placeholder: "{props.placeholder}",
        autocomplete: props.autocomplete.clone().unwrap_or_default(),
        value: form.value(Field::Password),
        oninput: move |e| form.edit(Field::Password, e.value()),
        onfocus: move |e| {
            if let Some(handler) = props.onfocus {
                handler.call(e);
            }
        },
        onblur: move |e| {
            if let Some(handler) = props.onblur {
                handler.call(e);
            }
        },
      }
      button {
        class: "{props.toggle_class}",
        "type": "button",
        aria_label: label,
        onclick: move |_| form.toggle_password_visibility(),
        if visible {
          EyeOffIcon {}
        } else {
          EyeIcon {}
        }
      }
    }
}

#[component]
fn EyeIcon() -> Element {
    rsx! {
      svg {
        class: "h-5 w-5 eye-glyph",
        fill: "none",
        stroke: "currentColor",
        stroke_width: "2",
        stroke_linecap: "round",
        stroke_linejoin: "round",
        view_box: "0 0 24 24",
        path { d: "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" }
        circle { cx: "12", cy: "12", r: "3" }
      }
    }
}

#[component]
fn EyeOffIcon() -> Element {
    rsx! {
      svg {
        class: "h-5 w-5 eye-glyph",
        fill: "none",
        stroke: "currentColor",
        stroke_width: "2",
        stroke_linecap: "round",
        stroke_linejoin: "round",
        view_box: "0 0 24 24",
        path { d: "M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49" }
        path { d: "M14.084 14.158a3 3 0 0 1-4.242-4.242" }
        path { d: "M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143" }
        path { d: "m2 2 20 20" }
      }
    }
}
