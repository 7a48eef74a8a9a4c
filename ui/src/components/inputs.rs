//! Input components for the sign-up form

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LabeledInputProps {
    /// Shared by the input's `id` and the label's `for`
    pub id: String,
    pub label: String,
    pub value: String,
    pub input_type: InputType,
    pub input_class: String,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn LabeledInput(props: LabeledInputProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "{props.input_class}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                oninput: move |event| props.on_change.call(event.value())
            }
        }
    }
}
