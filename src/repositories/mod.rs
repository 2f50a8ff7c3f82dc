//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱을 지원합니다.
//! 상위 계층은 [`users::UserStore`] trait 객체로만 저장소에 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserField, UserStore, user_repo::MongoUserStore};
//!
//! let store = MongoUserStore::new(database, redis);
//! let user = store.find_by_field(UserField::Email, "user@example.com").await?;
//! ```

pub mod users;
