use dioxus::prelude::*;

use crate::components::{
    display::{ErrorNotice, LoadingIndicator, SuccessNotice},
    inputs::{InputType, LabeledInput},
};
use crate::features::signup::*;
use crate::services::client::SignUpService;
use crate::console_warn;

/// Live handle on a sign-up form: its state plus the two ways to change it
#[derive(Clone, Copy, PartialEq)]
pub struct SignUpFormHandle {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
    pub submit: EventHandler<()>,
}

/// Owns the form state and wires submit to the `SignUpService` context.
/// A submit that arrives while the form is not submittable sends nothing.
pub fn use_sign_up_form() -> SignUpFormHandle {
    let service = use_context::<SignUpService>();
    let mut state = use_signal(SignUpState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = use_hook(|| {
        EventHandler::new(move |action: SignUpAction| {
            state.with_mut(|s| {
                s.reduce_in_place(action);
            });
        })
    });

    let submit = use_hook(|| {
        EventHandler::new(move |_: ()| {
            let Some(request) = state.with_mut(|s| s.begin_submit()) else {
                console_warn!("[SignUp] Ignoring submit while the form is not submittable");
                return;
            };

            let service = service.clone();
            spawn(async move {
                let action = submit_sign_up(service.client(), request).await;
                dispatch.call(action);
            });
        })
    });

    SignUpFormHandle {
        state,
        dispatch,
        submit,
    }
}

/// Stateful sign-up form. Reads its HTTP client from the `SignUpService`
/// context and drives [`SignUpView`] from a single `Signal<SignUpState>`.
#[component]
pub fn SignUpForm() -> Element {
    let form = use_sign_up_form();
    let dispatch = form.dispatch;

    rsx! {
        SignUpView {
            state: (form.state)(),
            on_edit: move |(field, value): (Field, String)| {
                dispatch.call(SignUpAction::Edit(field, value));
            },
            on_submit: form.submit
        }
    }
}

fn input_type_for(field: Field) -> InputType {
    if field.is_masked() {
        InputType::Password
    } else {
        InputType::Text
    }
}

/// Password inputs reflect whether the two entries match
fn input_class_for(field: Field, password_class: &str) -> String {
    if field.is_masked() {
        password_class.to_string()
    } else {
        "input-field".to_string()
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SignUpViewProps {
    pub state: SignUpState,
    pub on_edit: EventHandler<(Field, String)>,
    pub on_submit: EventHandler<()>,
}

/// Pure rendering of a `SignUpState`
#[component]
pub fn SignUpView(props: SignUpViewProps) -> Element {
    let state = props.state;
    let on_edit = props.on_edit;
    let on_submit = props.on_submit;
    let password_class = password_validation_class(&state.validate_passwords());

    rsx! {
        div {
            class: "sign-up-container",

            form {
                class: "sign-up-form",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    on_submit.call(());
                },

                h1 {
                    class: "form-title",
                    "Sign Up"
                }

                for field in Field::ALL {
                    LabeledInput {
                        key: "{field.id()}",
                        id: field.id().to_string(),
                        label: field.label().to_string(),
                        value: state.value(field).to_string(),
                        input_type: input_type_for(field),
                        input_class: input_class_for(field, password_class),
                        on_change: move |value: String| on_edit.call((field, value))
                    }
                }

                div {
                    class: "button-section",
                    button {
                        class: "sign-up-button",
                        r#type: "submit",
                        disabled: !state.submit_enabled(),
                        "Sign Up"
                    }
                    if state.submit_in_progress() {
                        LoadingIndicator {
                            message: "Signing up...".to_string()
                        }
                    }
                }
            }

            if let Some(message) = state.submit_error() {
                ErrorNotice {
                    message: message.to_string()
                }
            }

            if state.submit_succeeded() {
                SuccessNotice {
                    message: SIGN_UP_SUCCESS_MESSAGE.to_string()
                }
            }
        }
    }
}
