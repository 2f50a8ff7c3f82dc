//! 애플리케이션 상태

use std::sync::Arc;

use crate::repositories::users::UserStore;
use crate::services::auth::{AuthenticationReconciler, CredentialEncoder, IdentityProviderClient};
use crate::services::users::UserService;

/// 핸들러가 `web::Data<AppState>`로 받는 서비스 묶음
pub struct AppState {
    pub reconciler: AuthenticationReconciler,
    pub user_service: UserService,
    pub identity_provider: Arc<dyn IdentityProviderClient>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        encoder: Arc<dyn CredentialEncoder>,
        identity_provider: Arc<dyn IdentityProviderClient>,
    ) -> Self {
        Self {
            reconciler: AuthenticationReconciler::new(
                users.clone(),
                encoder.clone(),
                identity_provider.clone(),
            ),
            user_service: UserService::new(users, encoder),
            identity_provider,
        }
    }
}
