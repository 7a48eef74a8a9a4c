pub mod sign_up_page;

pub use sign_up_page::{SignUpPage, SignUpPageProps, SIGN_UP_UNAVAILABLE_MESSAGE};
