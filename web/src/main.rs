use dioxus::prelude::*;
use signup_ui::SignUpPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Sign Up" }

        main {
            SignUpPage {}
        }
    }
}
