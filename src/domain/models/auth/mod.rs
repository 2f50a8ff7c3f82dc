pub mod auth_input;

pub use auth_input::*;
