pub mod button;
pub mod field_error;
pub mod spinner;

pub use button::{Button, ButtonVariant};
pub use field_error::FieldError;
pub use spinner::Spinner;
