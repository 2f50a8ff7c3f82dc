//! 인증 서비스 모듈
//!
//! 로컬 로그인과 Google OAuth 2.0 로그인을 하나의 신원 확인 경로로 묶습니다.
//!
//! # Features
//!
//! - bcrypt 비밀번호 검증
//! - Google Authorization Code Flow (동의 화면 URL, 토큰 교환, 프로필 조회)
//! - 외부 계정 최초 로그인 시 로컬 사용자 자동 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthenticationReconciler, BcryptEncoder, GoogleIdentityClient};
//!
//! let reconciler = AuthenticationReconciler::new(
//!     users,
//!     Arc::new(BcryptEncoder::from_env()),
//!     Arc::new(GoogleIdentityClient::new(GoogleOAuthConfig::from_env()?)),
//! );
//! let user = reconciler.resolve_identity(AuthInput::Federated(token)).await?;
//! ```

pub mod google_auth_service;
pub mod identity_provider;
pub mod password_encoder;
pub mod reconciler;

#[cfg(test)]
pub mod stub_provider;

pub use google_auth_service::GoogleIdentityClient;
pub use identity_provider::IdentityProviderClient;
pub use password_encoder::{BcryptEncoder, CredentialEncoder};
pub use reconciler::AuthenticationReconciler;
