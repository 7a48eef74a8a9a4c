//! This crate contains the sign-up page, its components and the client that posts to the users API.

pub mod app;
pub use app::SignUpPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
