//! OAuth 프로바이더 모델
//!
//! 프로바이더별 응답 형식([`google_user::GoogleUserInfo`])은 모두
//! 공통 [`RemoteProfile`]로 변환되어 신원 확인 로직에 전달됩니다.

pub mod google_user;
pub mod remote_profile;

pub use google_user::GoogleUserInfo;
pub use remote_profile::RemoteProfile;
