//! 비밀번호 해싱/검증
//!
//! 신원 확인 로직은 [`CredentialEncoder`] trait에만 의존합니다.
//! 운영 환경에서는 bcrypt 기반 [`BcryptEncoder`]를 사용하며,
//! cost는 [`PasswordConfig::bcrypt_cost`]로 환경별로 조정됩니다.
//!
//! | 환경 | 기본 cost | 해싱 시간(대략) |
//! |------|-----------|-----------------|
//! | Development | 4 | ~1ms |
//! | Test | 4 | ~1ms |
//! | Staging | 10 | ~60ms |
//! | Production | 12 | ~250ms |

use std::time::Instant;

use crate::config::PasswordConfig;
use crate::errors::errors::{AppResult, ErrorContext};

pub trait CredentialEncoder: Send + Sync {
    /// 평문을 솔트가 포함된 단방향 해시로 변환합니다.
    fn hash(&self, plaintext: &str) -> AppResult<String>;

    /// 평문이 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우에는 `Ok(false)`가 아닌 에러를 반환합니다.
    fn verify(&self, plaintext: &str, digest: &str) -> AppResult<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptEncoder {
    cost: u32,
}

impl BcryptEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` / `ENVIRONMENT` 설정으로 생성
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl CredentialEncoder for BcryptEncoder {
    fn hash(&self, plaintext: &str) -> AppResult<String> {
        let start = Instant::now();

        let digest = bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(digest)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> AppResult<bool> {
        let start = Instant::now();

        let matched = bcrypt::verify(plaintext, digest).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", start.elapsed());
        Ok(matched)
    }
}
