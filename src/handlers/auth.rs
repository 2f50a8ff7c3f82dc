//! Authentication HTTP Handlers
//!
//! 로컬 로그인과 Google OAuth 로그인 엔드포인트입니다.
//! 두 경로 모두 [`AuthenticationReconciler::resolve_identity`]로 모이며,
//! 성공 시 해석된 사용자를 [`UserResponse`]로 돌려줍니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/login` | 이메일/비밀번호 로그인 | 200 |
//! | `GET` | `/connect/google` | Google 동의 화면으로 이동 | 302 |
//! | `GET` | `/connect/google/check` | Google 콜백 처리 | 200 |
//!
//! # Errors
//!
//! - 잘못된 자격 증명 → 401
//! - 프로바이더 오류 (동의 거부, code 없음, 토큰 교환/프로필 조회 실패) → 403
//!
//! [`AuthenticationReconciler::resolve_identity`]: crate::services::auth::AuthenticationReconciler::resolve_identity

use actix_web::{get, http::header, post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::users::request::{LoginRequest, OAuthCallbackQuery};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::{AuthInput, LocalCredentials};
use crate::errors::auth_error::{AuthError, ProviderError};
use crate::errors::errors::AppError;

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn local_login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let credentials = LocalCredentials::from(payload.into_inner());
    let user = state.reconciler
        .resolve_identity(AuthInput::Local(credentials))
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Google 동의 화면으로 리다이렉트
///
/// # Endpoint
/// `GET /connect/google`
#[get("/connect/google")]
pub async fn google_connect(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, state.identity_provider.authorization_url()))
        .finish()
}

/// Google OAuth 콜백 처리 핸들러
///
/// # Endpoint
/// `GET /connect/google/check?code={code}`
#[get("/connect/google/check")]
pub async fn google_check(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    // 사용자가 거부했거나 프로바이더에서 에러 발생
    if let Some(error) = query.error {
        let description = query.error_description
            .unwrap_or_else(|| "OAuth 인증이 취소되었거나 실패했습니다".to_string());
        log::warn!("Google OAuth 에러: {} - {}", error, description);
        return Err(AuthError::from(ProviderError::new(format!("{}: {}", error, description))).into());
    }

    let code = query.code
        .filter(|code| !code.trim().is_empty())
        .ok_or_else(|| AuthError::from(ProviderError::new("authorization code가 없습니다")))?;

    let token = state.identity_provider
        .exchange_code(&code)
        .await
        .map_err(AuthError::from)?;

    let user = state.reconciler
        .resolve_identity(AuthInput::Federated(token))
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use super::*;
    use crate::domain::entities::users::User;
    use crate::repositories::users::memory_repo::InMemoryUserStore;
    use crate::repositories::users::UserStore;
    use crate::services::auth::password_encoder::{BcryptEncoder, CredentialEncoder};
    use crate::services::auth::stub_provider::{StubIdentityProvider, STUB_AUTHORIZATION_URL};

    async fn state_with_bob(users: Arc<InMemoryUserStore>) -> web::Data<AppState> {
        let encoder = Arc::new(BcryptEncoder::new(4));
        let hash = encoder.hash("hunter22").unwrap();
        users
            .save(User::new_local("bob@example.com".to_string(), "bob".to_string(), hash))
            .await
            .unwrap();

        let provider = StubIdentityProvider::new()
            .with_code("code-ann", "tok-ann")
            .with_profile("tok-ann", "g-42", "a@x.com", "Ann")
            .with_code("code-dead", "tok-dead");

        web::Data::new(AppState::new(users, encoder, Arc::new(provider)))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .service(local_login)
                    .service(google_connect)
                    .service(google_check),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_local_login_success() {
        let app = app!(state_with_bob(Arc::new(InMemoryUserStore::new())).await);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "bob@example.com", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: UserResponse = test::read_body_json(resp).await;
        assert_eq!(body.email, "bob@example.com");
        assert!(!body.federated);
    }

    #[actix_web::test]
    async fn test_local_login_wrong_password_and_unknown_email_look_the_same() {
        let app = app!(state_with_bob(Arc::new(InMemoryUserStore::new())).await);

        let wrong = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "bob@example.com", "password": "nope-nope" }))
            .to_request();
        let wrong = test::call_service(&app, wrong).await;
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        let wrong_body: serde_json::Value = test::read_body_json(wrong).await;

        let unknown = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ghost@example.com", "password": "hunter22" }))
            .to_request();
        let unknown = test::call_service(&app, unknown).await;
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        let unknown_body: serde_json::Value = test::read_body_json(unknown).await;

        assert_eq!(wrong_body, unknown_body);
    }

    #[actix_web::test]
    async fn test_local_login_rejects_malformed_email() {
        let app = app!(state_with_bob(Arc::new(InMemoryUserStore::new())).await);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "bob", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_google_connect_redirects_to_provider() {
        let app = app!(state_with_bob(Arc::new(InMemoryUserStore::new())).await);

        let req = test::TestRequest::get().uri("/connect/google").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
            STUB_AUTHORIZATION_URL
        );
    }

    #[actix_web::test]
    async fn test_google_check_creates_user_once() {
        let users = Arc::new(InMemoryUserStore::new());
        let app = app!(state_with_bob(users.clone()).await);

        let first = test::TestRequest::get().uri("/connect/google/check?code=code-ann").to_request();
        let first: UserResponse = test::call_and_read_body_json(&app, first).await;

        let second = test::TestRequest::get().uri("/connect/google/check?code=code-ann").to_request();
        let second: UserResponse = test::call_and_read_body_json(&app, second).await;

        assert_eq!(first.email, "a@x.com");
        assert_eq!(first.username, "Ann");
        assert!(first.federated);
        assert_eq!(first.id, second.id);
        assert_eq!(users.len(), 2);
    }

    #[actix_web::test]
    async fn test_google_check_provider_failures_are_forbidden() {
        let app = app!(state_with_bob(Arc::new(InMemoryUserStore::new())).await);

        for uri in [
            "/connect/google/check?error=access_denied",
            "/connect/google/check",
            "/connect/google/check?code=",
            "/connect/google/check?code=unknown-code",
            "/connect/google/check?code=code-dead",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN, "uri: {}", uri);
        }
    }
}
