//! 사용자 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 클라이언트에 노출하는 사용자 정보
///
/// 비밀번호 해시와 외부 ID 값 자체는 포함하지 않고 연동 여부만 알려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub federated: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            federated: user.is_federated(),
            email: user.email,
            username: user.username,
        }
    }
}
