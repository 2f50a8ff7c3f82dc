//! 사용자 관리 서비스 모듈
//!
//! 로컬 계정 회원가입을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(users, encoder);
//! let user = user_service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
