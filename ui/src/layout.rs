use dioxus::prelude::*;

/// Light, full-height page shell used by the branded screen.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "min-h-screen flex flex-col bg-white text-gray-900 antialiased",
        {children}
      }
    }
}
