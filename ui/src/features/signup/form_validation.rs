use crate::features::signup::types::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PasswordValidation {
    None,
    Match,
    NoMatch,
}

impl SignUpState {
    pub fn validate_passwords(&self) -> PasswordValidation {
        if self.password.is_empty() && self.password_repeat.is_empty() {
            PasswordValidation::None
        } else if self.password == self.password_repeat && !self.password.is_empty() {
            PasswordValidation::Match
        } else {
            PasswordValidation::NoMatch
        }
    }

    /// Both passwords filled in and equal, with no request outstanding and no prior success
    pub fn submit_enabled(&self) -> bool {
        self.validate_passwords() == PasswordValidation::Match
            && !matches!(
                self.status,
                SubmitStatus::Submitting | SubmitStatus::Succeeded
            )
    }
}

pub fn password_validation_class(validation: &PasswordValidation) -> &'static str {
    match validation {
        PasswordValidation::Match => "input-field input-valid",
        PasswordValidation::NoMatch => "input-field input-invalid",
        _ => "input-field",
    }
}
