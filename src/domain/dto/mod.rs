//! 데이터 전송 객체 (DTO)
//!
//! HTTP 요청 본문/쿼리와 응답 JSON의 형태를 정의합니다.
//! 요청 DTO는 `validator`로 핸들러에서 검증합니다.

pub mod users;

pub use users::*;
