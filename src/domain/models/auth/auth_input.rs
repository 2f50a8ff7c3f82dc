//! 로그인 입력 타입
//!
//! 로그인 폼 제출인지 OAuth 토큰인지를 런타임에 검사하지 않도록
//! [`AuthInput`] 태그 유니온으로 구분합니다.

use std::fmt;

/// 로컬 로그인 폼 입력
#[derive(Clone, PartialEq, Eq)]
pub struct LocalCredentials {
    pub email: String,
    pub password: String,
}

impl LocalCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LocalCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// 프로바이더가 발급한 불투명한 액세스 토큰
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthInput {
    Local(LocalCredentials),
    Federated(AccessToken),
}

impl From<LocalCredentials> for AuthInput {
    fn from(credentials: LocalCredentials) -> Self {
        AuthInput::Local(credentials)
    }
}

impl From<AccessToken> for AuthInput {
    fn from(token: AccessToken) -> Self {
        AuthInput::Federated(token)
    }
}
