//! Google userinfo API 응답
//!
//! `https://www.googleapis.com/oauth2/v2/userinfo` 응답을 역직렬화합니다.
//! `email`/`profile` 스코프 동의 여부에 따라 일부 필드가 빠질 수 있어
//! `id`와 `email`을 제외하고 모두 선택 필드입니다.

use serde::Deserialize;

use super::remote_profile::RemoteProfile;

#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID (`sub`와 동일)
    pub id: String,

    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub given_name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,

    #[serde(default)]
    pub verified_email: bool,
}

impl From<GoogleUserInfo> for RemoteProfile {
    /// 이름이 없으면 이메일의 로컬 파트를 사용자명으로 사용합니다.
    fn from(info: GoogleUserInfo) -> Self {
        let name = info
            .name
            .or(info.given_name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| {
                info.email
                    .split('@')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });

        RemoteProfile {
            external_id: info.id,
            email: info.email,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_maps_to_profile() {
        let json = r#"{
            "id": "g-42",
            "email": "a@x.com",
            "verified_email": true,
            "name": "Ann",
            "given_name": "Ann",
            "picture": "https://lh3.googleusercontent.com/a/photo"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        let profile = RemoteProfile::from(info);

        assert_eq!(profile.external_id, "g-42");
        assert_eq!(profile.email, "a@x.com");
        assert_eq!(profile.name, "Ann");
    }

    #[test]
    fn test_missing_name_falls_back_to_email_local_part() {
        let json = r#"{ "id": "g-7", "email": "zoe@example.com" }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        let profile = RemoteProfile::from(info);

        assert_eq!(profile.name, "zoe");
    }
}
