//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 입력 검증과 DTO 변환만 담당하고, 서비스는 `web::Data<AppState>`로 받습니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 신원 확인, 회원가입                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`home`**: `GET /`
//! - **`auth`**: `POST /login`, `GET /connect/google`, `GET /connect/google/check`
//! - **`users`**: `POST /register`
//!
//! 모든 에러는 `AppError`로 변환되어 `{"error": "..."}` 형태로 응답합니다.

pub mod home;
pub mod users;
pub mod auth;
