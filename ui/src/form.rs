use dioxus::core::Task;
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared::{Field, LoginForm, Messages, SubmitOutcome, CONFIG};

/// Reactive handle over a [`LoginForm`] owned by the calling component.
#[derive(Clone, Copy, PartialEq)]
pub struct LoginFormHandle {
    form: Signal<LoginForm>,
    pending: Signal<Option<Task>>,
}

impl LoginFormHandle {
    pub fn value(&self, field: Field) -> String {
        self.form.read().value(field).to_string()
    }

    pub fn error(&self, field: Field) -> String {
        self.form.read().error(field).to_string()
    }

    pub fn is_submitting(&self) -> bool {
        self.form.read().is_submitting()
    }

    pub fn password_visible(&self) -> bool {
        self.form.read().password_visible()
    }

    pub fn password_input_type(&self) -> &'static str {
        self.form.read().password_input_type()
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.form.write().edit(field, value);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.write().toggle_password_visibility();
    }

    /// Validates the form and, if it passes, starts the simulated submission.
    /// The form goes back to idle once the configured delay elapses.
    pub fn submit(&mut self) {
        let outcome = self.form.write().submit();
        match outcome {
            SubmitOutcome::Started(attempt) => {
                let mut form = self.form;
                let mut pending = self.pending;
                let delay = self.form.peek().config().submit_delay_ms;
                debug!("Login submission started, settling in {}ms", delay);

                let task = spawn(async move {
                    TimeoutFuture::new(delay).await;
                    info!("Login attempt with: {}", attempt.to_json());
                    form.write().complete();
                    pending.set(None);
                });
                self.pending.set(Some(task));
            }
            SubmitOutcome::Rejected => {
                debug!("Login form rejected: {:?}", self.form.peek().errors());
            }
            SubmitOutcome::Busy => {}
        }
    }
}

/// Creates the form state for one login screen.
///
/// A submission still in flight when the component unmounts is cancelled,
/// so the form is never touched after it is gone.
pub fn use_login_form(messages: Messages) -> LoginFormHandle {
    let form = use_signal(|| LoginForm::new(messages, *CONFIG));
    let mut pending = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Ok(mut pending) = pending.try_write() {
            if let Some(task) = pending.take() {
                debug!("Cancelling pending login submission");
                task.cancel();
            }
        }
    });

    LoginFormHandle { form, pending }
}
