use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use shared::{Locale, LocaleSelector};

/// Language picker shown above the branded login. Selecting a language only
/// changes the label; nothing is translated.
#[component]
pub fn LanguageSelector() -> Element {
    let mut selector = use_signal(LocaleSelector::default);
    let current = selector.read().selected;
    let open = selector.read().open;

    rsx! {
      div { class: "w-full flex justify-center p-4",
        div { class: "relative text-gray-500 text-sm",
          button {
            class: "hover:underline focus:outline-none transition-colors text-sm cursor-pointer",
            "type": "button",
            onclick: move |_| selector.write().toggle(),
            "{current}"
          }

          if open {
            // Backdrop, clicking outside closes the popover
            div {
              class: "fixed inset-0 z-0",
              onclick: move |_| selector.write().close(),
            }
            div { class: "popover-enter absolute mt-2 w-48 bg-white rounded-md shadow-lg py-1 z-10",
              for label in Locale::ALL.map(|locale| locale.label()) {
                button {
                  key: "{label}",
                  class: if label == current.label() { "block w-full text-left px-4 py-2 text-sm text-gray-900 font-semibold bg-gray-50" } else { "block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100" },
                  "type": "button",
                  onclick: move |event| {
                      event.stop_propagation();
                      match selector.write().select_label(label) {
                          Ok(locale) => debug!("Display language set to {}", locale),
                          Err(e) => warn!("Ignoring language selection: {}", e),
                      }
                  },
                  "{label}"
                }
              }
            }
          }
        }
      }
    }
}
