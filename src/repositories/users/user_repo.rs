//! # MongoDB 사용자 저장소
//!
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 조회 캐싱을 지원합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `user:{field}:{value}` (예: `user:email:a@x.com`, `user:external_id:g-42`)
//! - **TTL**: [`RedisConfig::user_cache_ttl_seconds`] (기본 10분)
//! - **무효화**: `save` 성공 시 해당 사용자의 이메일/외부 ID 키 삭제
//!
//! 캐시 오류는 조회 실패로 이어지지 않습니다. MongoDB 결과가 항상 기준입니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use super::{UserField, UserStore};
use crate::{
    caching::redis::RedisClient,
    config::RedisConfig,
    db::Database,
    domain::entities::users::User,
    errors::errors::{AppError, AppResult},
    utils::normalize_email,
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserStore {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
    cache_ttl_seconds: u64,
}

impl MongoUserStore {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self {
            db,
            redis,
            cache_ttl_seconds: RedisConfig::user_cache_ttl_seconds(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    fn cache_key(field: UserField, value: &str) -> String {
        format!("user:{}:{}", field.as_str(), value)
    }

    fn cache_keys_for(user: &User) -> Vec<String> {
        let mut keys = vec![Self::cache_key(UserField::Email, &user.email)];
        if let Some(external_id) = &user.external_id {
            keys.push(Self::cache_key(UserField::ExternalId, external_id));
        }
        keys
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `email` 유니크 인덱스
    /// 2. `external_id` 유니크 부분 인덱스 (값이 문자열인 문서만)
    ///
    /// 2번 인덱스가 같은 외부 계정의 중복 생성을 저장소 수준에서 막습니다.
    /// 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let external_id_index = IndexModel::builder()
            .keys(doc! { "external_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { "external_id": { "$type": "string" } })
                .name("external_id_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, external_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn invalidate(&self, user: &User) {
        if let Err(e) = self.redis.del_multiple(&Self::cache_keys_for(user)).await {
            log::warn!("사용자 캐시 무효화 실패: {}", e);
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_field(&self, field: UserField, value: &str) -> AppResult<Option<User>> {
        let value = match field {
            UserField::Email => normalize_email(value),
            UserField::ExternalId => value.to_string(),
        };

        let cache_key = Self::cache_key(field, &value);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let mut filter = Document::new();
        filter.insert(field.as_str(), value.as_str());

        let user = self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(user) = &user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, self.cache_ttl_seconds)
                .await;
        }

        Ok(user)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        user.email = normalize_email(&user.email);
        user.updated_at = DateTime::now();

        match user.id {
            None => {
                let result = self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(map_write_error)?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
                })?;
                user.id = Some(id);
            }
            Some(id) => {
                let result = self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .await
                    .map_err(map_write_error)?;

                if result.matched_count == 0 {
                    return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
                }
            }
        }

        self.invalidate(&user).await;

        Ok(user)
    }
}

fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError("이미 등록된 이메일 또는 외부 계정입니다".to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
