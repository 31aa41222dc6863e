pub mod config;
pub mod error;
pub mod form;
pub mod locale;
pub mod submission;
pub mod validation;

pub use config::{FormConfig, CONFIG};
pub use error::{Error, Result};
pub use form::{LoginForm, SubmitOutcome, SubmitState};
pub use locale::{Locale, LocaleSelector};
pub use submission::LoginAttempt;
pub use validation::{validate, Field, FieldErrors, Messages, Validation};
