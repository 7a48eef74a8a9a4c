use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SubmitNoticeProps {
    pub message: String,
}

/// Shown below the form once the account was created
#[component]
pub fn SuccessNotice(props: SubmitNoticeProps) -> Element {
    rsx! {
        div {
            class: "submit-result success",
            div {
                class: "result-message",
                "{props.message}"
            }
        }
    }
}

#[component]
pub fn ErrorNotice(props: SubmitNoticeProps) -> Element {
    rsx! {
        div {
            class: "submit-result error",
            role: "alert",
            div {
                class: "result-message",
                "✗ {props.message}"
            }
        }
    }
}
