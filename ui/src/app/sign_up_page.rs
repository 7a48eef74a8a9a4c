use dioxus::prelude::*;

use crate::components::display::ErrorNotice;
use crate::components::forms::SignUpForm;
use crate::services::client::SignUpService;
use crate::services::config::ApiConfig;
use crate::{console_error, console_info};

const SIGN_UP_CSS: Asset = asset!("/assets/styling/sign_up.css");

/// Shown in place of the form when no client could be built from the config
pub const SIGN_UP_UNAVAILABLE_MESSAGE: &str = "Sign up is currently unavailable.";

#[derive(Props, PartialEq, Clone)]
pub struct SignUpPageProps {
    #[props(default)]
    pub config: ApiConfig,
}

/// Sign-up screen backed by the HTTP client described by `config`
#[component]
pub fn SignUpPage(props: SignUpPageProps) -> Element {
    let service = use_hook(move || {
        if let Err(errors) = props.config.validate() {
            return Err(errors.join("; "));
        }
        console_info!("[SignUp] Using users endpoint {}", props.config.users_path);
        SignUpService::from_config(props.config).map_err(|e| e.to_string())
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SIGN_UP_CSS }
        {match service {
            Ok(service) => rsx! {
                SignUpScope { service }
            },
            Err(error) => {
                console_error!("[SignUp] Sign up client unavailable: {}", error);
                rsx! {
                    ErrorNotice {
                        message: SIGN_UP_UNAVAILABLE_MESSAGE.to_string()
                    }
                }
            }
        }}
    }
}

#[derive(Props, PartialEq, Clone)]
struct SignUpScopeProps {
    service: SignUpService,
}

/// Makes the service available to the form below it
#[component]
fn SignUpScope(props: SignUpScopeProps) -> Element {
    use_context_provider(move || props.service);

    rsx! {
        SignUpForm {}
    }
}
