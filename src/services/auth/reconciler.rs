//! # 신원 확인(reconciliation)
//!
//! 로그인 폼 제출과 OAuth 토큰을 하나의 경로로 받아 로컬 [`User`]로 해석합니다.
//!
//! ## 흐름
//!
//! ```text
//! AuthInput::Local(email, password)
//!   ├─ email로 조회 ── 없음 ──────────────────────────► InvalidCredentials
//!   ├─ external_id 있음 ─────────────────────────────► User (비밀번호 검증 생략)
//!   └─ bcrypt 검증 ── 불일치 ─► InvalidCredentials / 일치 ─► User
//!
//! AuthInput::Federated(token)
//!   ├─ fetch_profile ── 실패 ────────────────────────► Provider
//!   ├─ external_id로 조회 ── 있음 ───────────────────► User
//!   └─ 일회용 비밀번호로 생성 + 저장 ─► email로 재조회 ─► User
//!        └─ ConflictError ─► external_id로 재조회 ─► User (동시 첫 로그인)
//! ```
//!
//! 같은 외부 계정으로 몇 번 로그인하든 사용자는 한 명만 생성됩니다.

use std::sync::Arc;

use rand::distr::{Alphanumeric, SampleString};

use super::identity_provider::IdentityProviderClient;
use super::password_encoder::CredentialEncoder;
use crate::domain::entities::users::User;
use crate::domain::models::auth::{AccessToken, AuthInput, LocalCredentials};
use crate::domain::models::oauth::RemoteProfile;
use crate::errors::auth_error::AuthError;
use crate::errors::errors::AppError;
use crate::repositories::users::{UserField, UserStore};

const THROWAWAY_PASSWORD_LEN: usize = 32;

pub struct AuthenticationReconciler {
    users: Arc<dyn UserStore>,
    encoder: Arc<dyn CredentialEncoder>,
    provider: Arc<dyn IdentityProviderClient>,
}

impl AuthenticationReconciler {
    pub fn new(
        users: Arc<dyn UserStore>,
        encoder: Arc<dyn CredentialEncoder>,
        provider: Arc<dyn IdentityProviderClient>,
    ) -> Self {
        Self { users, encoder, provider }
    }

    pub async fn resolve_identity(&self, input: AuthInput) -> Result<User, AuthError> {
        match input {
            AuthInput::Local(credentials) => self.resolve_local(credentials).await,
            AuthInput::Federated(token) => self.resolve_federated(&token).await,
        }
    }

    async fn resolve_local(&self, credentials: LocalCredentials) -> Result<User, AuthError> {
        let user = match self.users.find_by_field(UserField::Email, &credentials.email).await? {
            Some(user) => user,
            None => {
                // 없는 계정도 같은 bcrypt 비용을 치러 응답 시간으로 존재 여부가 드러나지 않게 함
                let _ = self.encoder.hash(&credentials.password);
                log::info!("로그인 실패: 등록되지 않은 이메일");
                return Err(AuthError::InvalidCredentials);
            }
        };

        // 외부 계정은 프로바이더가 이미 인증했음
        if user.is_federated() {
            log::debug!("외부 연동 계정 로그인: {}", user.email);
            return Ok(user);
        }

        if !self.encoder.verify(&credentials.password, &user.password_hash)? {
            log::info!("로그인 실패: 비밀번호 불일치 ({})", user.email);
            return Err(AuthError::InvalidCredentials);
        }

        log::info!("로컬 로그인 성공: {}", user.email);
        Ok(user)
    }

    async fn resolve_federated(&self, token: &AccessToken) -> Result<User, AuthError> {
        let profile = self.provider.fetch_profile(token).await?;

        if let Some(user) = self.users.find_by_field(UserField::ExternalId, &profile.external_id).await? {
            log::info!("외부 계정 로그인: {}", user.email);
            return Ok(user);
        }

        let external_id = profile.external_id.clone();

        let saved = match self.register_federated(profile).await {
            Ok(saved) => saved,
            Err(AppError::ConflictError(msg)) => {
                // 다른 요청이 같은 외부 계정을 먼저 생성했으면 그 사용자를 사용
                return match self.users.find_by_field(UserField::ExternalId, &external_id).await? {
                    Some(user) => Ok(user),
                    None => Err(AppError::ConflictError(msg).into()),
                };
            }
            Err(e) => return Err(e.into()),
        };

        log::info!("새 외부 계정 사용자 생성: {}", saved.email);

        self.users
            .find_by_field(UserField::Email, &saved.email)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("저장된 사용자를 다시 조회할 수 없습니다".to_string()).into()
            })
    }

    async fn register_federated(&self, profile: RemoteProfile) -> Result<User, AppError> {
        let password_hash = self.encoder.hash(&throwaway_password())?;
        self.users.save(User::new_federated(profile, password_hash)).await
    }
}

/// 사용자에게 노출되지 않는 무작위 비밀번호
fn throwaway_password() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), THROWAWAY_PASSWORD_LEN)
}
