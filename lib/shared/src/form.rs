//! Login form state and the idle/submitting controller.

use crate::config::FormConfig;
use crate::submission::LoginAttempt;
use crate::validation::{validate, Field, FieldErrors, Messages};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the form is now submitting.
    Started(LoginAttempt),
    /// At least one field is invalid; the error set was recomputed.
    Rejected,
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    identifier: String,
    password: String,
    errors: FieldErrors,
    state: SubmitState,
    password_visible: bool,
    messages: Messages,
    config: FormConfig,
}

impl LoginForm {
    pub fn new(messages: Messages, config: FormConfig) -> Self {
        Self {
            identifier: String::new(),
            password: String::new(),
            errors: FieldErrors::default(),
            state: SubmitState::Idle,
            password_visible: false,
            messages,
            config,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Identifier => &self.identifier,
            Field::Password => &self.password,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Stores the new value and drops that field's error, if any.
    /// The other field's error is left as is until the next submit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Identifier => self.identifier = value,
            Field::Password => self.password = value,
        }
        if self.errors.has_error(field) {
            self.errors.clear(field);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state == SubmitState::Submitting {
            return SubmitOutcome::Busy;
        }

        let validation = validate(
            &self.identifier,
            &self.password,
            &self.messages,
            self.config.min_password_len,
        );
        self.errors = validation.errors;

        if !validation.submittable {
            return SubmitOutcome::Rejected;
        }

        self.state = SubmitState::Submitting;
        SubmitOutcome::Started(LoginAttempt::new(&self.identifier, &self.password))
    }

    /// Ends a simulated submission. Returns false if nothing was in flight.
    pub fn complete(&mut self) -> bool {
        let was_submitting = self.is_submitting();
        self.state = SubmitState::Idle;
        was_submitting
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// The `type` attribute of the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branded() -> LoginForm {
        LoginForm::new(Messages::BRANDED, FormConfig::default())
    }

    #[test]
    fn starts_empty_and_idle() {
        let form = branded();
        assert_eq!(form.identifier(), "");
        assert_eq!(form.password(), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn valid_submit_cycles_through_submitting() {
        let mut form = branded();
        form.edit(Field::Identifier, "user@example.com");
        form.edit(Field::Password, "abcdef");

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Started(LoginAttempt::new("user@example.com", "abcdef"))
        );
        assert!(form.is_submitting());
        assert!(form.errors().is_empty());

        assert!(form.complete());
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn invalid_submit_stays_idle_and_recomputes_both_errors() {
        let mut form = branded();
        form.edit(Field::Identifier, "john");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(
            form.error(Field::Identifier),
            "Please enter a valid email or mobile number"
        );
        assert_eq!(form.error(Field::Password), "Password is required");

        form.edit(Field::Identifier, "5551234567");
        form.edit(Field::Password, "abc");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.error(Field::Identifier), "");
        assert_eq!(
            form.error(Field::Password),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = branded();
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert!(form.errors().has_error(Field::Identifier));
        assert!(form.errors().has_error(Field::Password));

        form.edit(Field::Identifier, "u");
        assert_eq!(form.error(Field::Identifier), "");
        assert_eq!(form.error(Field::Password), "Password is required");

        form.edit(Field::Password, "p");
        assert!(form.errors().is_empty());
        // values are kept across attempts
        assert_eq!(form.identifier(), "u");
        assert_eq!(form.password(), "p");
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut form = branded();
        form.edit(Field::Identifier, "5551234567");
        form.edit(Field::Password, "secret1");
        assert!(matches!(form.submit(), SubmitOutcome::Started(_)));

        form.edit(Field::Identifier, "");
        assert_eq!(form.submit(), SubmitOutcome::Busy);
        assert!(form.errors().is_empty());
        assert!(form.is_submitting());
    }

    #[test]
    fn fields_stay_editable_while_submitting() {
        let mut form = branded();
        form.edit(Field::Identifier, "user@example.com");
        form.edit(Field::Password, "abcdef");
        form.submit();
        form.edit(Field::Password, "changed!");
        assert_eq!(form.password(), "changed!");
        assert!(form.complete());
        assert_eq!(form.password(), "changed!");
    }

    #[test]
    fn complete_when_idle_is_a_no_op() {
        let mut form = branded();
        assert!(!form.complete());
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn visibility_toggle_round_trips() {
        let mut form = branded();
        form.edit(Field::Password, "abcdef");
        form.toggle_password_visibility();
        assert!(form.password_visible());
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_visibility();
        assert!(!form.password_visible());
        assert_eq!(form.password_input_type(), "password");
        assert_eq!(form.password(), "abcdef");
    }

    #[test]
    fn form_carries_its_config() {
        let form = LoginForm::new(Messages::BRANDED, FormConfig::from_env());
        assert_eq!(
            form.config().submit_delay_ms,
            FormConfig::from_env().submit_delay_ms
        );

        let quick = FormConfig {
            submit_delay_ms: 10,
            ..FormConfig::default()
        };
        let form = LoginForm::new(Messages::BRANDED, quick);
        assert_eq!(form.config().submit_delay_ms, 10);
        assert_eq!(form.config().min_password_len, 6);
    }

    #[test]
    fn configured_minimum_length_applies() {
        let config = FormConfig {
            min_password_len: 8,
            ..FormConfig::default()
        };
        let mut form = LoginForm::new(Messages::WELCOME, config);
        form.edit(Field::Identifier, "user@example.com");
        form.edit(Field::Password, "abcdefg");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
    }
}
