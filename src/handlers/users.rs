//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/register` | 로컬 계정 회원가입 | 201 Created |
//!
//! 이미 사용 중인 이메일이면 409 Conflict, 입력 검증 실패는 400 Bad Request입니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::errors::errors::AppError;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /register`
///
/// ```bash
/// curl -X POST http://localhost:8080/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","username":"newuser","password":"password123"}'
/// ```
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}
