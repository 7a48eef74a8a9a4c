use crate::features::signup::types::{SignUpAction, SignUpRequest};
use crate::services::client::SignUpClient;
use crate::{console_error, console_info};

/// Sends one sign-up request and turns the outcome into the action that
/// settles the form. Failures are logged and carried as a user-facing message.
pub async fn submit_sign_up(client: &dyn SignUpClient, request: SignUpRequest) -> SignUpAction {
    console_info!("[SignUp] Submitting sign up for {}", request.username);

    match client.sign_up(&request).await {
        Ok(()) => {
            console_info!("[SignUp] Sign up accepted for {}", request.username);
            SignUpAction::SubmitSucceeded
        }
        Err(error) => {
            console_error!("[SignUp] Sign up request failed: {}", error);
            SignUpAction::SubmitFailed(error.user_message())
        }
    }
}
