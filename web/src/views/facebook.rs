use dioxus::prelude::*;
use ui::{FacebookLogin, Layout};

use crate::Route;

/// Light-theme shell around everything under `/facebook`.
#[component]
pub fn FacebookLayout() -> Element {
    rsx! {
      Layout { Outlet::<Route> {} }
    }
}

#[component]
pub fn FacebookPage() -> Element {
    rsx! {
      document::Title { "Log in | Facebook" }
      FacebookLogin {}
    }
}
