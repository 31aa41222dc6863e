pub mod facebook;
pub mod footer;
pub mod language_selector;
pub mod login;
pub mod password_field;
pub mod simple;

pub use facebook::FacebookLogin;
pub use footer::Footer;
pub use language_selector::LanguageSelector;
pub use login::WelcomeLogin;
pub use password_field::PasswordField;
pub use simple::*;
