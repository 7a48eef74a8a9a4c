//! User Interface Components
//!
//! - **forms**: the sign-up form and its pure view
//! - **display**: loading indicator and result notices
//! - **inputs**: labeled input fields

pub mod display;
pub mod forms;
pub mod inputs;
