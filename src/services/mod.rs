//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소/인코더/프로바이더를 trait 객체로 주입받으며,
//! `main`에서 한 번 조립되어 [`crate::core::AppState`]로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthenticationReconciler, users::UserService};
//!
//! let user_service = UserService::new(users.clone(), encoder.clone());
//! let reconciler = AuthenticationReconciler::new(users, encoder, provider);
//! ```

pub mod users;
pub mod auth;
