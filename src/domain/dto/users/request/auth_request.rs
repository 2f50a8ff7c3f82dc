//! 로그인 관련 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::auth::LocalCredentials;

/// 로컬 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl From<LoginRequest> for LocalCredentials {
    fn from(request: LoginRequest) -> Self {
        LocalCredentials::new(request.email, request.password)
    }
}

/// Google 리다이렉트 콜백 쿼리
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
