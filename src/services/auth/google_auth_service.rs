//! # Google OAuth 2.0 클라이언트
//!
//! [`IdentityProviderClient`]의 Google 구현입니다.
//!
//! ## 요청 형식
//!
//! ```text
//! 1. 동의 화면
//!    GET {auth_uri}?client_id=...&redirect_uri=...&scope=profile%20email&response_type=code
//!
//! 2. 토큰 교환
//!    POST {token_uri}
//!    Content-Type: application/x-www-form-urlencoded
//!    code=...&client_id=...&client_secret=...&redirect_uri=...&grant_type=authorization_code
//!
//! 3. 프로필 조회
//!    GET {userinfo_uri}
//!    Authorization: Bearer ACCESS_TOKEN
//! ```
//!
//! Client Secret은 서버에서만 사용하며 로그에 남기지 않습니다.

use async_trait::async_trait;

use super::identity_provider::IdentityProviderClient;
use crate::config::GoogleOAuthConfig;
use crate::domain::dto::users::response::GoogleTokenResponse;
use crate::domain::models::auth::AccessToken;
use crate::domain::models::oauth::{GoogleUserInfo, RemoteProfile};
use crate::errors::auth_error::ProviderError;

/// 요청하는 스코프
pub const GOOGLE_SCOPES: &str = "profile email";

pub struct GoogleIdentityClient {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleIdentityClient {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProviderClient for GoogleIdentityClient {
    fn authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", GOOGLE_SCOPES),
            ("response_type", "code"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, ProviderError> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 토큰 교환 거부: {} {}", status, error_text);
            return Err(ProviderError::new(format!("Google 토큰 교환 실패: {}", status)));
        }

        let token = response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| ProviderError::new(format!("Google 토큰 응답 파싱 실패: {}", e)))?;

        Ok(AccessToken::new(token.access_token))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<RemoteProfile, ProviderError> {
        let response = self.http
            .get(&self.config.userinfo_uri)
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 사용자 정보 조회 거부: {} {}", status, error_text);
            return Err(ProviderError::new(format!("Google 사용자 정보 조회 실패: {}", status)));
        }

        let info = response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| ProviderError::new(format!("Google 사용자 정보 파싱 실패: {}", e)))?;

        if info.id.trim().is_empty() {
            return Err(ProviderError::new("Google 사용자 ID가 비어 있습니다"));
        }

        Ok(RemoteProfile::from(info))
    }
}
