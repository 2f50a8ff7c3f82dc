//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티를 정의합니다.
//! 이 서비스의 도메인 엔티티는 [`users::User`] 하나뿐입니다.

pub mod users;
