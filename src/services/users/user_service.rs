//! # 사용자 서비스
//!
//! 로컬 계정 회원가입을 담당합니다.
//!
//! ## 처리 순서
//!
//! 1. 이메일 중복 확인 (정규화된 이메일 기준)
//! 2. bcrypt 해싱 (환경별 cost)
//! 3. 저장. 동시 가입으로 인한 중복은 저장소의 유니크 인덱스가 잡아
//!    [`AppError::ConflictError`]로 돌려줍니다.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::{UserField, UserStore};
use crate::services::auth::password_encoder::CredentialEncoder;

pub struct UserService {
    users: Arc<dyn UserStore>,
    encoder: Arc<dyn CredentialEncoder>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, encoder: Arc<dyn CredentialEncoder>) -> Self {
        Self { users, encoder }
    }

    /// 로컬 계정 생성
    ///
    /// 입력 검증(`validator`)은 핸들러에서 끝난 상태로 호출됩니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이미 사용 중인 이메일
    /// * `DatabaseError` / `InternalError` - 저장 또는 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let start_time = Instant::now();

        if self.users.find_by_field(UserField::Email, &request.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let password_hash = self.encoder.hash(&request.password)?;

        let user = User::new_local(
            request.email,
            request.username.trim().to_string(),
            password_hash,
        );

        let created = self.users.save(user).await?;

        log::info!("회원가입 완료: {} ({:?})", created.email, start_time.elapsed());
        Ok(created)
    }
}
