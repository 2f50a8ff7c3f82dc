//! 테스트용 ID 프로바이더
//!
//! 등록된 code → token → profile 매핑만 성공하고 나머지는 [`ProviderError`]입니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::identity_provider::IdentityProviderClient;
use crate::domain::models::auth::AccessToken;
use crate::domain::models::oauth::RemoteProfile;
use crate::errors::auth_error::ProviderError;

pub const STUB_AUTHORIZATION_URL: &str = "https://idp.test/authorize?client_id=test";

#[derive(Default)]
pub struct StubIdentityProvider {
    codes: HashMap<String, String>,
    profiles: HashMap<String, RemoteProfile>,
    profile_calls: AtomicUsize,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: &str, token: &str) -> Self {
        self.codes.insert(code.to_string(), token.to_string());
        self
    }

    pub fn with_profile(mut self, token: &str, external_id: &str, email: &str, name: &str) -> Self {
        self.profiles.insert(
            token.to_string(),
            RemoteProfile {
                external_id: external_id.to_string(),
                email: email.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProviderClient for StubIdentityProvider {
    fn authorization_url(&self) -> String {
        STUB_AUTHORIZATION_URL.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, ProviderError> {
        self.codes
            .get(code)
            .map(AccessToken::new)
            .ok_or_else(|| ProviderError::new("invalid_grant"))
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<RemoteProfile, ProviderError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(token.secret())
            .cloned()
            .ok_or_else(|| ProviderError::new("invalid_token"))
    }
}
