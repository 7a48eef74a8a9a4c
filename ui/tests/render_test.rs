//! Server-side renders of the sign-up form, checking the markup a browser would receive

use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use signup_ui::app::{SignUpPage, SignUpPageProps, SIGN_UP_UNAVAILABLE_MESSAGE};
use signup_ui::components::forms::{SignUpForm, SignUpView};
use signup_ui::features::signup::*;
use signup_ui::services::client::{SignUpClient, SignUpService};
use signup_ui::services::config::ApiConfig;
use signup_ui::services::errors::ClientResult;

const SUCCESS: &str = "Please check your e-mail to activate your account";

struct NeverCalled;

#[async_trait::async_trait(?Send)]
impl SignUpClient for NeverCalled {
    async fn sign_up(&self, _request: &SignUpRequest) -> ClientResult<()> {
        panic!("rendering must not send requests");
    }
}

#[component]
fn FormHarness() -> Element {
    use_context_provider(|| SignUpService::new(NeverCalled));
    rsx! { SignUpForm {} }
}

#[component]
fn ViewHarness(state: SignUpState) -> Element {
    rsx! {
        SignUpView {
            state,
            on_edit: move |_| {},
            on_submit: move |_| {}
        }
    }
}

fn render_form() -> String {
    let mut dom = VirtualDom::new(FormHarness);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_view(state: SignUpState) -> String {
    let mut dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { state });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_page(config: ApiConfig) -> String {
    let mut dom = VirtualDom::new_with_props(SignUpPage, SignUpPageProps { config });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Opening tag of the submit button
fn submit_button(html: &str) -> &str {
    let start = html.find("<button").expect("form renders a button");
    let end = start + html[start..].find('>').expect("button tag is closed");
    &html[start..=end]
}

fn filled() -> SignUpState {
    SignUpState::default()
        .reduce(SignUpAction::Edit(Field::Username, "user1".to_string()))
        .reduce(SignUpAction::Edit(Field::Email, "user1@mail.com".to_string()))
        .reduce(SignUpAction::Edit(Field::Password, "P4ssword".to_string()))
        .reduce(SignUpAction::Edit(Field::PasswordRepeat, "P4ssword".to_string()))
}

#[test]
fn test_has_heading_and_button() {
    let html = render_form();
    assert!(html.contains("<h1"), "{html}");
    assert!(html.contains(">Sign Up</h1>"), "{html}");
    assert!(html.contains(">Sign Up</button>"), "{html}");
}

#[test]
fn test_inputs_are_labelled() {
    let html = render_form();
    for (id, label) in [
        ("username", "Username"),
        ("email", "E-mail"),
        ("password", "Password"),
        ("passwordRepeat", "Password Repeat"),
    ] {
        assert!(html.contains(&format!("for=\"{id}\"")), "missing label for {id}: {html}");
        assert!(html.contains(&format!("id=\"{id}\"")), "missing input {id}: {html}");
        assert!(html.contains(&format!(">{label}</label>")), "missing {label}: {html}");
    }
}

#[test]
fn test_password_inputs_are_masked() {
    let html = render_form();
    assert_eq!(html.matches("type=\"password\"").count(), 2, "{html}");
    assert_eq!(html.matches("type=\"text\"").count(), 2, "{html}");
}

#[test]
fn test_no_indicator_or_notice_before_submit() {
    let html = render_view(filled());
    assert!(!html.contains("role=\"status\""), "{html}");
    assert!(!html.contains(SUCCESS), "{html}");
}

#[test]
fn test_indicator_while_submitting() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());

    let html = render_view(state);
    assert!(html.contains("role=\"status\""), "{html}");
    assert!(!html.contains(SUCCESS), "{html}");
}

#[test]
fn test_success_notice_is_appended_to_form() {
    let mut state = filled();
    state.begin_submit();
    state.reduce_in_place(SignUpAction::SubmitSucceeded);

    let html = render_view(state);
    assert!(html.contains(SUCCESS), "{html}");
    assert!(html.contains("id=\"username\""), "form should stay visible: {html}");
    assert!(!html.contains("role=\"status\""), "{html}");
}

#[test]
fn test_error_notice_after_failure() {
    let mut state = filled();
    state.begin_submit();
    state.reduce_in_place(SignUpAction::SubmitFailed(
        "Could not reach the server. Please try again.".to_string(),
    ));

    let html = render_view(state);
    assert!(html.contains("role=\"alert\""), "{html}");
    assert!(html.contains("Could not reach the server. Please try again."), "{html}");
    assert!(!html.contains("role=\"status\""), "{html}");
    assert!(!html.contains(SUCCESS), "{html}");
}

#[test]
fn test_button_disabled_initially() {
    let html = render_form();
    assert!(submit_button(&html).contains("disabled=true"), "{html}");
}

#[test]
fn test_button_disabled_for_mismatched_passwords() {
    let state = filled().reduce(SignUpAction::Edit(
        Field::PasswordRepeat,
        "N0tTheSame".to_string(),
    ));

    let html = render_view(state);
    assert!(submit_button(&html).contains("disabled=true"), "{html}");
}

#[test]
fn test_button_enabled_for_matching_passwords() {
    let html = render_view(filled());
    assert!(!submit_button(&html).contains("disabled"), "{html}");
}

#[test]
fn test_button_disabled_while_submitting() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());

    let html = render_view(state);
    assert!(submit_button(&html).contains("disabled=true"), "{html}");
    assert!(html.contains("role=\"status\""), "{html}");
}

#[test]
fn test_page_renders_form_for_valid_config() {
    let html = render_page(ApiConfig::default().with_base_url("http://127.0.0.1:8080"));
    assert!(html.contains("id=\"username\""), "{html}");
    assert!(!html.contains(SIGN_UP_UNAVAILABLE_MESSAGE), "{html}");
}

#[test]
fn test_page_reports_unusable_config_instead_of_form() {
    let config = ApiConfig {
        users_path: "api/1.0/users".to_string(),
        ..ApiConfig::default()
    };

    let html = render_page(config);
    assert!(html.contains(SIGN_UP_UNAVAILABLE_MESSAGE), "{html}");
    assert!(html.contains("role=\"alert\""), "{html}");
    assert!(!html.contains("<form"), "{html}");
}
