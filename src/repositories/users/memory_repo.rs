//! 테스트용 메모리 저장소
//!
//! MongoDB 저장소와 같은 규칙(이메일 정규화, email/external_id 유일성, ID 할당)을 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use super::{UserField, UserStore};
use crate::domain::entities::users::User;
use crate::errors::errors::{AppError, AppResult};
use crate::utils::normalize_email;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn matches(user: &User, field: UserField, value: &str) -> bool {
        match field {
            UserField::Email => user.email == normalize_email(value),
            UserField::ExternalId => user.external_id.as_deref() == Some(value),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_field(&self, field: UserField, value: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| Self::matches(user, field, value)).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.email = normalize_email(&user.email);
        user.updated_at = DateTime::now();

        let mut users = self.users.lock().unwrap();

        let conflict = users.iter().any(|existing| {
            existing.id != user.id
                && (existing.email == user.email
                    || (user.external_id.is_some() && existing.external_id == user.external_id))
        });
        if conflict {
            return Err(AppError::ConflictError("이미 등록된 이메일 또는 외부 계정입니다".to_string()));
        }

        match user.id {
            None => {
                user.id = Some(ObjectId::new());
                users.push(user.clone());
            }
            Some(id) => {
                let slot = users
                    .iter_mut()
                    .find(|existing| existing.id == Some(id))
                    .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
                *slot = user.clone();
            }
        }

        Ok(user)
    }
}
