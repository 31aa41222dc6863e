use serde::{Deserialize, Serialize};

use crate::validation::password_len;

/// What a simulated submission records for diagnostics.
///
/// The password never leaves the form; only its length is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub identifier: String,
    pub password_len: usize,
}

impl LoginAttempt {
    pub fn new(identifier: &str, password: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            password_len: password_len(password),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_recorded() {
        let attempt = LoginAttempt::new("user@example.com", "hunter22");
        let json = attempt.to_json();
        assert_eq!(json, r#"{"identifier":"user@example.com","password_len":8}"#);
        assert!(!json.contains("hunter22"));
    }
}
