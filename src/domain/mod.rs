//! 도메인 계층
//!
//! ```text
//! domain/
//! ├── entities/     ← MongoDB 문서와 매핑되는 User
//! ├── models/       ← 로그인 입력, 외부 프로필
//! └── dto/          ← HTTP 요청/응답 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;
