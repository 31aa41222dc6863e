//! Centralized configuration for the login forms.
//!
//! Browser builds have no process environment, so values are read from
//! compile-time variables and fall back to the reference defaults.

use std::sync::LazyLock;

/// Delay of the simulated submission, in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_500;
/// Minimum accepted password length, in characters.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// How long a submission stays in flight (default: 1500)
    pub submit_delay_ms: u32,
    /// Passwords shorter than this are rejected (default: 6)
    pub min_password_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl FormConfig {
    /// Load configuration from `LOGIN_SUBMIT_DELAY_MS` and
    /// `LOGIN_MIN_PASSWORD_LEN` as set at build time.
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("LOGIN_SUBMIT_DELAY_MS"),
            option_env!("LOGIN_MIN_PASSWORD_LEN"),
        )
    }

    fn from_vars(submit_delay_ms: Option<&str>, min_password_len: Option<&str>) -> Self {
        Self {
            submit_delay_ms: submit_delay_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_SUBMIT_DELAY_MS),
            min_password_len: min_password_len
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_MIN_PASSWORD_LEN),
        }
    }
}

/// Global configuration instance, lazily initialized on first access.
pub static CONFIG: LazyLock<FormConfig> = LazyLock::new(FormConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = FormConfig::default();
        assert_eq!(config.submit_delay_ms, 1_500);
        assert_eq!(config.min_password_len, 6);
    }

    #[test]
    fn parses_overrides() {
        let config = FormConfig::from_vars(Some("250"), Some(" 8 "));
        assert_eq!(config.submit_delay_ms, 250);
        assert_eq!(config.min_password_len, 8);
    }

    #[test]
    fn falls_back_on_garbage() {
        let config = FormConfig::from_vars(Some("soon"), None);
        assert_eq!(config, FormConfig::default());
    }
}
