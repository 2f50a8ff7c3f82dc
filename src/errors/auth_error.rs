//! 신원 확인(reconciliation) 실패 타입
//!
//! 로컬 로그인과 Google 로그인 모두 [`AuthError`] 하나로 실패를 표현합니다.
//! "없는 이메일"과 "틀린 비밀번호"는 같은 [`AuthError::InvalidCredentials`]로
//! 합쳐서 계정 존재 여부가 외부에 드러나지 않게 합니다.

use thiserror::Error;

use super::errors::AppError;

/// 외부 ID 프로바이더(토큰 교환, 프로필 조회) 실패
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    /// 사용자 없음 또는 비밀번호 불일치
    #[error("잘못된 이메일 또는 비밀번호입니다")]
    InvalidCredentials,

    /// 토큰 교환/프로필 조회 실패. 재시도하지 않습니다.
    #[error("ID 프로바이더 오류: {0}")]
    Provider(#[from] ProviderError),

    /// 저장소/해싱 오류는 해석하지 않고 그대로 전달합니다.
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => AppError::AuthenticationError(error.to_string()),
            AuthError::Provider(_) => AppError::AuthorizationError(error.to_string()),
            AuthError::Internal(inner) => inner,
        }
    }
}
