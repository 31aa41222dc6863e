use dioxus::prelude::*;

const META_LOGO: Asset = asset!("/assets/meta.svg");

#[component]
pub fn Footer() -> Element {
    rsx! {
      div { class: "flex flex-col items-center space-y-6 mt-8",
        img {
          src: META_LOGO,
          alt: "Meta Logo",
          width: "100",
          height: "32",
          class: "opacity-60",
        }
        div { class: "flex space-x-4 text-gray-500 text-sm",
          a { class: "hover:underline", href: "#", "About" }
          a { class: "hover:underline", href: "#", "Help" }
          a { class: "hover:underline", href: "#", "More" }
        }
      }
    }
}
