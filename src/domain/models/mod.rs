//! 도메인 모델 및 값 객체
//!
//! - [`auth`] - 로그인 입력 ([`auth::AuthInput`])
//! - [`oauth`] - 외부 프로바이더 프로필

pub mod auth;
pub mod oauth;
