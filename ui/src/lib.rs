//! This crate contains all shared UI for the workspace.

mod layout;
pub use layout::Layout;

mod form;
pub use form::*;

mod components;
pub use components::*;
