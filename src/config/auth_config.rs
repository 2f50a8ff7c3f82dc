//! 인증 관련 설정
//!
//! Google OAuth 2.0 클라이언트 설정을 환경 변수에서 읽어옵니다.
//! 필수 값이 없으면 패닉 대신 [`AppError::ConfigError`]를 반환합니다.

use std::env;

use crate::errors::errors::{AppError, AppResult};

const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google OAuth 2.0 클라이언트 설정
///
/// # Environment Variables
///
/// * `GOOGLE_CLIENT_ID` (필수)
/// * `GOOGLE_CLIENT_SECRET` (필수)
/// * `GOOGLE_REDIRECT_URI` (필수) - 예: `http://localhost:8080/connect/google/check`
/// * `GOOGLE_AUTH_URI`, `GOOGLE_TOKEN_URI`, `GOOGLE_USERINFO_URI` (선택)
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl GoogleOAuthConfig {
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            client_id: required("GOOGLE_CLIENT_ID")?,
            client_secret: required("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: required("GOOGLE_REDIRECT_URI")?,
            auth_uri: optional("GOOGLE_AUTH_URI", DEFAULT_AUTH_URI),
            token_uri: optional("GOOGLE_TOKEN_URI", DEFAULT_TOKEN_URI),
            userinfo_uri: optional("GOOGLE_USERINFO_URI", DEFAULT_USERINFO_URI),
        })
    }

    /// 기본 Google 엔드포인트를 사용하는 설정을 만듭니다.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            auth_uri: DEFAULT_AUTH_URI.to_string(),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            userinfo_uri: DEFAULT_USERINFO_URI.to_string(),
        }
    }
}

fn required(key: &str) -> AppResult<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

fn optional(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_google_endpoints() {
        let config = GoogleOAuthConfig::new("id", "secret", "http://localhost:8080/connect/google/check");

        assert_eq!(config.auth_uri, DEFAULT_AUTH_URI);
        assert_eq!(config.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(config.userinfo_uri, DEFAULT_USERINFO_URI);
    }

    #[test]
    fn test_missing_required_key_is_config_error() {
        let result = required("SOCIAL_AUTH_TEST_SURELY_UNSET_KEY");

        match result {
            Err(AppError::ConfigError(msg)) => assert!(msg.contains("SOCIAL_AUTH_TEST_SURELY_UNSET_KEY")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }
}
