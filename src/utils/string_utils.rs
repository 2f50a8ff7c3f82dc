//! 문자열 정규화 유틸리티

/// 이메일을 저장/조회용 형태로 정규화합니다.
///
/// 앞뒤 공백을 제거하고 소문자로 변환합니다. 저장소는 저장과 조회 모두에
/// 같은 규칙을 적용하므로 대소문자만 다른 이메일은 같은 계정으로 취급됩니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
