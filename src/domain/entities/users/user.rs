//! 사용자 엔티티
//!
//! MongoDB `users` 컬렉션의 문서와 1:1로 매핑됩니다.
//!
//! ## 불변 조건
//!
//! - `email`은 전체 사용자 중 유일합니다.
//! - `password_hash`는 항상 채워져 있습니다. Google로 처음 로그인해 생성된
//!   계정도 무작위 일회용 비밀번호의 해시를 가집니다.
//! - `external_id`가 있으면 외부 프로바이더에 연결된 계정이며,
//!   로컬 로그인 시 비밀번호 검증을 건너뜁니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::RemoteProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 생성 시 할당하는 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub email: String,

    /// 표시 이름. 외부 계정은 프로필 이름으로 초기화됩니다.
    pub username: String,

    pub password_hash: String,

    /// 외부 프로바이더의 사용자 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 회원가입으로 만드는 로컬 계정
    pub fn new_local(email: String, username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            password_hash,
            external_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 외부 프로필로 만드는 연동 계정
    ///
    /// `password_hash`는 사용자에게 노출되지 않는 일회용 비밀번호의 해시여야 합니다.
    pub fn new_federated(profile: RemoteProfile, password_hash: String) -> Self {
        let now = DateTime::now();
        let RemoteProfile { external_id, email, name } = profile;

        Self {
            id: None,
            email,
            username: name,
            password_hash,
            external_id: Some(external_id),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_federated(&self) -> bool {
        self.external_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_is_not_federated() {
        let user = User::new_local(
            "bob@example.com".to_string(),
            "bob".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert!(!user.is_federated());
        assert_eq!(user.id_string(), None);
    }

    #[test]
    fn test_new_federated_user_takes_profile_fields() {
        let profile = RemoteProfile {
            external_id: "g-42".to_string(),
            email: "a@x.com".to_string(),
            name: "Ann".to_string(),
        };

        let user = User::new_federated(profile, "$2b$04$hash".to_string());

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.username, "Ann");
        assert_eq!(user.external_id.as_deref(), Some("g-42"));
        assert!(user.is_federated());
        assert!(!user.password_hash.is_empty());
    }
}
