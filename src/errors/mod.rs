//! 에러 타입 모듈
//!
//! - [`errors::AppError`] - HTTP 응답으로 변환되는 애플리케이션 전역 에러
//! - [`auth_error::AuthError`] - 로그인 신원 확인 실패

pub mod auth_error;
pub mod errors;

pub use auth_error::*;
pub use errors::*;
