//! Google OAuth 응답 DTO

use serde::Deserialize;

/// Google 토큰 엔드포인트 응답
///
/// 이 서비스는 `access_token`만 사용합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub scope: Option<String>,
}
