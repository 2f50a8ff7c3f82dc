//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 상태를 정의합니다.
//!
//! ### [`app_state`] - 의존성 조립
//! - **AppState**: 서비스 인스턴스 묶음. `main`에서 한 번 조립해 `web::Data`로 공유
//! - **명시적 주입**: 저장소/인코더/프로바이더를 `Arc<dyn Trait>`로 전달
//!
//! | 역할 | 운영 구현 | 테스트 구현 |
//! |------|-----------|-------------|
//! | `UserStore` | `MongoUserStore` | `InMemoryUserStore` |
//! | `CredentialEncoder` | `BcryptEncoder` | `BcryptEncoder` (cost 4) |
//! | `IdentityProviderClient` | `GoogleIdentityClient` | `StubIdentityProvider` |

pub mod app_state;

pub use app_state::AppState;
