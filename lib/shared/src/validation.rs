use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Identifier,
    Password,
}

/// Per-field error messages. An empty string means the field has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub identifier: String,
    pub password: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Identifier => &self.identifier,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = message.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.slot(field).clear();
    }

    pub fn has_error(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.password.is_empty()
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Identifier => &mut self.identifier,
            Field::Password => &mut self.password,
        }
    }
}

/// Error wording for one login screen. The rules are shared, only the text differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub identifier_required: &'static str,
    pub identifier_invalid: &'static str,
    pub password_required: &'static str,
    pub password_too_short: &'static str,
}

impl Messages {
    /// Wording of the branded screen, which accepts an email or a mobile number.
    pub const BRANDED: Messages = Messages {
        identifier_required: "Email or mobile number is required",
        identifier_invalid: "Please enter a valid email or mobile number",
        password_required: "Password is required",
        password_too_short: "Password must be at least 6 characters",
    };

    /// Wording of the generic welcome screen, which only asks for an email.
    pub const WELCOME: Messages = Messages {
        identifier_required: "Email is required",
        identifier_invalid: "Please enter a valid email address",
        password_required: "Password is required",
        password_too_short: "Password must be at least 6 characters",
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    pub submittable: bool,
}

/// Checks `s` against the email pattern. Matching is case-insensitive.
pub fn is_email(s: &str) -> bool {
    RE_EMAIL.is_match(&s.to_lowercase())
}

/// A bare phone number is exactly ten ASCII digits.
pub fn is_phone(s: &str) -> bool {
    RE_PHONE.is_match(s)
}

pub fn is_valid_identifier(s: &str) -> bool {
    is_email(s) || is_phone(s)
}

/// Password length as a browser reports it, in UTF-16 code units.
/// Characters outside the Basic Multilingual Plane count twice.
pub fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Validates both fields and produces a fresh error set.
///
/// Any identifier containing `@` is accepted even when it is not a
/// well-formed address; only strings that are neither an email, a phone
/// number, nor contain `@` are rejected.
pub fn validate(
    identifier: &str,
    password: &str,
    messages: &Messages,
    min_password_len: usize,
) -> Validation {
    let mut errors = FieldErrors::default();

    if identifier.is_empty() {
        errors.set(Field::Identifier, messages.identifier_required);
    } else if !is_valid_identifier(identifier) && !identifier.contains('@') {
        errors.set(Field::Identifier, messages.identifier_invalid);
    }

    if password.is_empty() {
        errors.set(Field::Password, messages.password_required);
    } else if password_len(password) < min_password_len {
        errors.set(Field::Password, messages.password_too_short);
    }

    let submittable = errors.is_empty();
    Validation {
        errors,
        submittable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(identifier: &str, password: &str) -> Validation {
        validate(identifier, password, &Messages::BRANDED, 6)
    }

    #[test]
    fn well_formed_emails_pass() {
        for email in [
            "user@example.com",
            "First.Last@Sub.Domain.org",
            "a+tag@mail.co",
            "\"quoted name\"@example.com",
            "root@[192.168.0.1]",
        ] {
            assert!(is_email(email), "{email} should match");
            assert_eq!(check(email, "abcdef").errors.identifier, "");
        }
    }

    #[test]
    fn ten_digit_numbers_pass() {
        assert!(!is_email("5551234567"));
        assert!(is_phone("5551234567"));
        assert_eq!(check("5551234567", "abcdef").errors.identifier, "");
    }

    #[test]
    fn phone_must_be_exactly_ten_ascii_digits() {
        assert!(!is_phone("555123456"));
        assert!(!is_phone("55512345678"));
        assert!(!is_phone("555-123-4567"));
        assert!(!is_phone("５５５１２３４５６７"));
    }

    #[test]
    fn anything_with_an_at_sign_is_accepted() {
        for lenient in ["@", "a@b", "not an email@", "@@@"] {
            assert!(!is_email(lenient));
            assert_eq!(check(lenient, "abcdef").errors.identifier, "", "{lenient}");
        }
    }

    #[test]
    fn garbage_identifier_is_rejected() {
        let result = check("john", "abcdef");
        assert_eq!(
            result.errors.identifier,
            "Please enter a valid email or mobile number"
        );
        assert!(!result.submittable);
    }

    #[test]
    fn empty_identifier_is_required() {
        let result = check("", "abcdef");
        assert_eq!(result.errors.identifier, "Email or mobile number is required");
        assert_eq!(result.errors.password, "");
    }

    #[test]
    fn password_length_boundary() {
        for len in 1..6 {
            let password = "x".repeat(len);
            assert_eq!(
                check("user@example.com", &password).errors.password,
                "Password must be at least 6 characters"
            );
        }
        for password in ["xxxxxx", "      ", "123456789", "пароль"] {
            assert_eq!(check("user@example.com", password).errors.password, "");
        }
    }

    #[test]
    fn password_length_counts_utf16_units() {
        assert_eq!(password_len("😀😀😀"), 6);
        assert_eq!(password_len("пароль"), 6);
        assert_eq!(check("user@example.com", "😀😀😀").errors.password, "");
        assert_eq!(
            check("user@example.com", "😀😀").errors.password,
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn empty_password_is_required() {
        assert_eq!(
            check("user@example.com", "").errors.password,
            "Password is required"
        );
    }

    #[test]
    fn reference_scenarios() {
        let ok = check("user@example.com", "abcdef");
        assert!(ok.submittable);
        assert!(ok.errors.is_empty());

        let empty = check("", "");
        assert!(!empty.submittable);
        assert_eq!(
            empty.errors,
            FieldErrors {
                identifier: "Email or mobile number is required".into(),
                password: "Password is required".into(),
            }
        );

        let short = check("5551234567", "12345");
        assert!(!short.submittable);
        assert_eq!(short.errors.identifier, "");
        assert_eq!(short.errors.password, "Password must be at least 6 characters");
    }

    #[test]
    fn welcome_table_changes_only_wording() {
        let result = validate("", "", &Messages::WELCOME, 6);
        assert_eq!(result.errors.identifier, "Email is required");
        assert_eq!(result.errors.password, "Password is required");
        assert!(validate("user@example.com", "abcdef", &Messages::WELCOME, 6).submittable);
    }

    #[test]
    fn field_errors_accessors() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Password, "bad");
        assert!(errors.has_error(Field::Password));
        assert!(!errors.has_error(Field::Identifier));
        errors.clear(Field::Password);
        assert!(errors.is_empty());
    }
}
