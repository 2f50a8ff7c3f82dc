//! 홈 핸들러

use actix_web::{get, HttpResponse};
use serde_json::json;

/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "grettings": "Hello World!" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_home_returns_greeting() {
        let app = test::init_service(App::new().service(home)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "grettings": "Hello World!" }));
    }
}
