//! 외부 ID 프로바이더 추상화
//!
//! Authorization Code Flow에서 우리 서버가 담당하는 세 단계를 표현합니다.
//!
//! ```text
//! GET /connect/google          → authorization_url()  → 302 프로바이더 동의 화면
//! GET /connect/google/check    → exchange_code(code)  → AccessToken
//!                              → fetch_profile(token) → RemoteProfile
//! ```
//!
//! 실패는 모두 [`ProviderError`]이며 재시도하지 않습니다.

use async_trait::async_trait;

use crate::domain::models::auth::AccessToken;
use crate::domain::models::oauth::RemoteProfile;
use crate::errors::auth_error::ProviderError;

#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// 사용자를 보낼 프로바이더 동의 화면 URL
    fn authorization_url(&self) -> String;

    /// Authorization Code를 액세스 토큰으로 교환합니다.
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, ProviderError>;

    /// 액세스 토큰으로 사용자 프로필을 조회합니다.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<RemoteProfile, ProviderError>;
}
