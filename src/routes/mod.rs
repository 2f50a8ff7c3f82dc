//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶어 등록합니다. 보호된 라우트는 없습니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/` | [`handlers::home::home`] |
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/register` | [`handlers::users::register`] |
//! | `POST` | `/login` | [`handlers::auth::local_login`] |
//! | `GET` | `/connect/google` | [`handlers::auth::google_connect`] |
//! | `GET` | `/connect/google/check` | [`handlers::auth::google_check`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    cfg.service(handlers::home::home);

    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::register);
}

/// 로컬 로그인과 Google OAuth 라우트
///
/// ```bash
/// # 로컬 로그인
/// curl -X POST http://localhost:8080/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
///
/// # Google OAuth 시작 (브라우저에서)
/// open http://localhost:8080/connect/google
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::local_login)
        .service(handlers::auth::google_connect)
        .service(handlers::auth::google_check);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_auth_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "identity_provider": "Google OAuth 2.0"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "identity_provider": "Google OAuth 2.0"
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use super::*;
    use crate::core::AppState;
    use crate::repositories::users::memory_repo::InMemoryUserStore;
    use crate::services::auth::password_encoder::BcryptEncoder;
    use crate::services::auth::stub_provider::StubIdentityProvider;

    #[actix_web::test]
    async fn test_all_routes_are_registered() {
        let state = web::Data::new(AppState::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(BcryptEncoder::new(4)),
            Arc::new(StubIdentityProvider::new()),
        ));
        let app = test::init_service(App::new().app_data(state).configure(configure_all_routes)).await;

        let health = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(health.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(health).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "social_auth_backend");

        let home = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(home.status(), StatusCode::OK);

        let connect = test::call_service(&app, test::TestRequest::get().uri("/connect/google").to_request()).await;
        assert_eq!(connect.status(), StatusCode::FOUND);

        let login = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "nobody@example.com", "password": "whatever" }))
            .to_request();
        assert_eq!(test::call_service(&app, login).await.status(), StatusCode::UNAUTHORIZED);

        let register = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "email": "ann@example.com", "username": "ann", "password": "hunter22" }))
            .to_request();
        assert_eq!(test::call_service(&app, register).await.status(), StatusCode::CREATED);
    }
}
