//! 사용자 저장소 계층
//!
//! 신원 확인 로직은 구체적인 저장소가 아니라 [`UserStore`] trait에만 의존합니다.
//! 운영 환경에서는 MongoDB + Redis 기반 [`user_repo::MongoUserStore`]를 사용합니다.
//!
//! # 저장소가 보장해야 하는 것
//!
//! - `email` 유일성 (중복 시 [`AppError::ConflictError`])
//! - `external_id` 유일성. 같은 외부 계정으로 동시에 첫 로그인이 들어와도
//!   사용자가 두 번 생성되지 않도록 저장소 수준에서 막습니다.
//! - `save` 시 새 사용자에게 ID 할당

use async_trait::async_trait;

use crate::domain::entities::users::User;
use crate::errors::errors::AppResult;

pub mod user_repo;

#[cfg(test)]
pub mod memory_repo;

/// 조회 가능한 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Email,
    ExternalId,
}

impl UserField {
    /// 문서 필드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Email => "email",
            UserField::ExternalId => "external_id",
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 필드 값이 일치하는 사용자를 최대 한 명 찾습니다.
    async fn find_by_field(&self, field: UserField, value: &str) -> AppResult<Option<User>>;

    /// `id`가 없으면 삽입하고 ID를 할당하며, 있으면 기존 문서를 교체합니다.
    async fn save(&self, user: User) -> AppResult<User>;
}
