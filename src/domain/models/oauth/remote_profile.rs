/// 외부 프로바이더에서 받아온 사용자 프로필
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProfile {
    pub external_id: String,
    pub email: String,
    pub name: String,
}
