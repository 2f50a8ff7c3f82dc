//! 소셜 로그인 인증 백엔드
//!
//! 이메일/비밀번호 로그인과 Google OAuth 2.0 로그인을 하나의 사용자 신원으로
//! 묶어 주는 Actix-web 서비스입니다.
//!
//! # Features
//!
//! - **회원가입**: 로컬 계정 생성 (bcrypt 해싱)
//! - **신원 확인**: 로컬 로그인과 Google 로그인을 같은 사용자로 해석
//! - **OAuth 2.0**: Google 첫 로그인 시 사용자 자동 생성, 이후 같은 사용자 재사용
//! - **MongoDB**: 사용자 데이터 영구 저장 (email / external_id 유니크 인덱스)
//! - **Redis**: 사용자 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::core::AppState;
//! use social_auth_backend::domain::models::auth::{AuthInput, LocalCredentials};
//!
//! let state = AppState::new(users, encoder, identity_provider);
//! let user = state.reconciler
//!     .resolve_identity(AuthInput::Local(LocalCredentials::new("a@x.com", "hunter22")))
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
