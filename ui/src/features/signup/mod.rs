//! Sign-up form state
//!
//! The form is a small state machine: `Idle -> Submitting -> Succeeded`, with
//! `Submitting -> Failed` returning control to the user for another attempt.
//! All mutations go through [`SignUpState::reduce_in_place`] so the component
//! only ever holds one `Signal<SignUpState>`.

pub mod form_validation;
pub mod submit;
pub mod types;

pub use form_validation::*;
pub use submit::submit_sign_up;
pub use types::*;
