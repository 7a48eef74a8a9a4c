// Core types for the sign-up form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Text shown once the backend accepted the sign-up request
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Please check your e-mail to activate your account";

/// The four editable inputs of the sign-up form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordRepeat,
}

impl Field {
    /// Render order of the inputs
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PasswordRepeat,
    ];

    /// DOM id, also used as the label's `for` target
    pub fn id(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordRepeat => "passwordRepeat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "E-mail",
            Field::Password => "Password",
            Field::PasswordRepeat => "Password Repeat",
        }
    }

    /// Whether the input masks what is typed
    pub fn is_masked(&self) -> bool {
        matches!(self, Field::Password | Field::PasswordRepeat)
    }
}

/// Body of `POST /api/1.0/users`. The repeated password never leaves the form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Where the form is in its submission lifecycle
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the lifetime of the form
    Succeeded,
    /// Last attempt failed; the form accepts another submit
    Failed(String),
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpAction {
    Edit(Field, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SignUpState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_repeat: String,
    pub status: SubmitStatus,
}

impl SignUpState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: SignUpAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Applies an action without moving the state, so a `Signal` can be updated through `with_mut`
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        let old_status = self.status.clone();

        match action {
            SignUpAction::Edit(field, value) => {
                *self.value_mut(field) = value;
            }
            SignUpAction::SubmitStarted => {
                if self.status != SubmitStatus::Succeeded {
                    self.status = SubmitStatus::Submitting;
                }
            }
            SignUpAction::SubmitSucceeded => {
                self.status = SubmitStatus::Succeeded;
            }
            SignUpAction::SubmitFailed(message) => {
                if self.status != SubmitStatus::Succeeded {
                    self.status = SubmitStatus::Failed(message);
                }
            }
        }

        if self.status != old_status {
            crate::console_debug!(
                "[STATE] Submit status changing: {:?} -> {:?}",
                old_status,
                self.status
            );
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordRepeat => &self.password_repeat,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordRepeat => &mut self.password_repeat,
        }
    }

    pub fn submit_in_progress(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn submit_succeeded(&self) -> bool {
        self.status == SubmitStatus::Succeeded
    }

    pub fn submit_error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Snapshot of the values sent to the backend
    pub fn request(&self) -> SignUpRequest {
        SignUpRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Moves to `Submitting` and hands out the request, or returns `None` when
    /// the form cannot be submitted right now (passwords differ, a request is
    /// already outstanding, or the sign-up already succeeded).
    pub fn begin_submit(&mut self) -> Option<SignUpRequest> {
        if !self.submit_enabled() {
            return None;
        }
        self.reduce_in_place(SignUpAction::SubmitStarted);
        Some(self.request())
    }
}
