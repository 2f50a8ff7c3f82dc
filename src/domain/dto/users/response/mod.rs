pub mod user_response;
pub mod google_oauth_response;

pub use google_oauth_response::GoogleTokenResponse;
pub use user_response::UserResponse;
